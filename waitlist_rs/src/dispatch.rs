use thiserror::Error;

/// One outbound form post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Form `action`, query string included.
    pub action: String,
    /// Name of the hidden frame that receives the response.
    pub target: String,
    /// Ordered `(name, value)` pairs, honeypot last.
    pub fields: Vec<(String, String)>,
}

impl Submission {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The form or its target frame is not in the document.
    #[error("submission surface is not mounted")]
    Unmounted,
    /// The host refused to send the form.
    #[error("submission was rejected by the host: {0}")]
    Rejected(String),
}

/// A channel that sends a [`Submission`] without navigating the visible page.
///
/// A successful return only means the post left; the outcome arrives later
/// (if at all) through the controller's completion signal.
pub trait Dispatch {
    fn dispatch(&mut self, submission: &Submission) -> Result<(), DispatchError>;
}

impl<D: Dispatch + ?Sized> Dispatch for Box<D> {
    fn dispatch(&mut self, submission: &Submission) -> Result<(), DispatchError> {
        (**self).dispatch(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Submission {
        Submission {
            action: "https://example.com/post".to_string(),
            target: "frame".to_string(),
            fields: vec![
                ("EMAIL".to_string(), "a@b.com".to_string()),
                ("b_x_y".to_string(), String::new()),
            ],
        }
    }

    #[test]
    fn field_lookup() {
        let submission = sample();
        assert_eq!(submission.field("EMAIL"), Some("a@b.com"));
        assert_eq!(submission.field("b_x_y"), Some(""));
        assert_eq!(submission.field("missing"), None);
    }

    #[test]
    fn boxed_dispatch_forwards() {
        struct Count(usize);
        impl Dispatch for Count {
            fn dispatch(&mut self, _: &Submission) -> Result<(), DispatchError> {
                self.0 += 1;
                Ok(())
            }
        }

        let mut boxed: Box<Count> = Box::new(Count(0));
        boxed.dispatch(&sample()).unwrap();
        assert_eq!(boxed.0, 1);
    }
}
