//! Form validation helpers shared by the login, contact, and project forms.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// True when the value is empty after trimming.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Minimal shape check for an email address: one `@` separating a non-empty
/// local part from a dotted domain, and no whitespace anywhere. The backend
/// performs the authoritative validation.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

/// True when `end` is not before `start`. ISO `yyyy-mm-dd` strings compare
/// correctly as plain strings; an empty end date means "ongoing" and always
/// passes.
pub fn date_order_ok(start: &str, end: &str) -> bool {
    if start.is_empty() || end.is_empty() {
        return true;
    }
    end >= start
}
