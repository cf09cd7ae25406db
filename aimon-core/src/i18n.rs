/// Translation hook for user-facing phrases.
///
/// Templates mark the single numeric argument with `%1`, following the
/// placeholder convention of desktop i18n catalogs.
pub trait Translate {
    /// Translate a fixed phrase.
    fn tr(&self, message: &str) -> String;

    /// Translate a template, substituting `n` for `%1`.
    fn tr_n(&self, template: &str, n: i64) -> String;
}

/// Identity translator: returns the English source text with `%1` filled in.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl Translate for Passthrough {
    fn tr(&self, message: &str) -> String {
        message.to_string()
    }

    fn tr_n(&self, template: &str, n: i64) -> String {
        template.replace("%1", &n.to_string())
    }
}
