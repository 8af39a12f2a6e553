/// Script conversion interface for language implementations
pub trait ScriptConverter: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ja", ...)
    fn language_code(&self) -> &str;

    /// Convert a raw query into the dictionary's canonical script.
    /// Must be total: unmapped characters pass through unchanged.
    fn normalize_for_search(&self, raw: &str) -> String;

    /// Secondary reading of a canonical headword, for display only
    fn to_display_script(&self, canonical: &str) -> String;
}
