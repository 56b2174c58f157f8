/// Email address syntax checks used by the contact form validator.
///
/// Dot-atom addresses per RFC 5322 with RFC 6531 internationalised
/// characters. Domains must be fully qualified host names with a
/// non-numeric top-level label.
///
/// # Examples
/// ```
/// use contact_api::validation::email::check_email;
///
/// assert!(check_email("user.name+tag@example.com").is_ok());
/// assert!(check_email("missing@").is_err());
/// ```
pub mod email;
