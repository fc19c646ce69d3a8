//! Transient notices carried across redirects.
//!
//! Redirecting handlers attach a short code to the query string
//! (`?success=order_placed`); the shell template renders the mapped
//! message as a toast. Codes rather than free text keep the query string
//! out of the injection surface.

/// A notice for the shell template's toast area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    /// `success` or `error`; doubles as the toast CSS class.
    pub kind: &'static str,
    /// Human-readable message.
    pub message: &'static str,
}

impl Flash {
    const fn success(message: &'static str) -> Self {
        Self {
            kind: "success",
            message,
        }
    }

    const fn error(message: &'static str) -> Self {
        Self {
            kind: "error",
            message,
        }
    }

    /// Resolve the `error`/`success` query parameters into a notice.
    ///
    /// Unknown codes resolve to nothing rather than echoing the input.
    #[must_use]
    pub fn from_query(error: Option<&str>, success: Option<&str>) -> Option<Self> {
        if let Some(code) = error {
            return match code {
                "login_required" => Some(Self::error("Please login first")),
                "cart_empty" => Some(Self::error("Your cart is empty")),
                "session" => Some(Self::error("Session expired, please try again")),
                _ => None,
            };
        }

        success.and_then(|code| match code {
            "logged_out" => Some(Self::success("Logged out successfully")),
            "order_placed" => Some(Self::success("Order placed successfully!")),
            "registered" => Some(Self::success("Registration successful! Please login.")),
            "item_removed" => Some(Self::success("Item removed")),
            _ => None,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_wins_over_success() {
        let flash = Flash::from_query(Some("login_required"), Some("order_placed"));
        assert_eq!(
            flash,
            Some(Flash {
                kind: "error",
                message: "Please login first"
            })
        );
    }

    #[test]
    fn test_unknown_codes_render_nothing() {
        assert_eq!(Flash::from_query(Some("<script>"), None), None);
        assert_eq!(Flash::from_query(None, Some("bogus")), None);
        assert_eq!(Flash::from_query(None, None), None);
    }

    #[test]
    fn test_success_codes() {
        let flash = Flash::from_query(None, Some("order_placed")).unwrap();
        assert_eq!(flash.kind, "success");
        assert_eq!(flash.message, "Order placed successfully!");
    }
}
