//! # Failure Reporting
//!
//! Records failures through `tracing`, including their full cause chain.

use crate::application::error::ApplicationError;
use crate::domain::errors::DomainError;
use std::error::Error;
use tracing::{error, warn};

/// Returns the error's message followed by the message of every cause.
///
/// # Examples
///
/// ```
/// use arka::application::reporting::error_chain;
/// use arka::domain::errors::DomainError;
///
/// let io = std::io::Error::other("disk full");
/// let err = DomainError::with_cause("could not save order", io);
/// assert_eq!(error_chain(&err), vec!["could not save order", "disk full"]);
/// ```
#[must_use]
pub fn error_chain(err: &(dyn Error + 'static)) -> Vec<String> {
    let mut chain = vec![err.to_string()];
    let mut current = err.source();
    while let Some(cause) = current {
        chain.push(cause.to_string());
        current = cause.source();
    }
    chain
}

/// Logs a domain failure.
///
/// Not-found failures are expected in normal traffic and go out at `warn`;
/// everything else at `error`.
pub fn report_domain_failure(err: &DomainError) {
    let chain = error_chain(err);
    if err.is_not_found() {
        warn!(
            code = err.code(),
            category = err.category(),
            chain = ?chain,
            "{}",
            err
        );
    } else {
        error!(
            code = err.code(),
            category = err.category(),
            chain = ?chain,
            "{}",
            err
        );
    }
}

/// Logs an application failure together with its boundary status.
pub fn report_application_failure(err: &ApplicationError) {
    if let Some(domain) = err.as_domain() {
        report_domain_failure(domain);
        return;
    }

    let chain = error_chain(err);
    let status = err.status_code();
    if status >= 500 {
        error!(status, code = err.error_code(), chain = ?chain, "{}", err);
    } else {
        warn!(status, code = err.error_code(), chain = ?chain, "{}", err);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::error::RepositoryError;
    use serde_json::Value;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn chain_of_plain_error_is_its_message() {
        let err = DomainError::product_not_found("prod-001");
        assert_eq!(error_chain(&err), vec!["Product not found: prod-001"]);
    }

    #[test]
    fn chain_walks_nested_causes() {
        let repo = RepositoryError::unavailable("timeout");
        let app: ApplicationError = repo.into();
        let err = DomainError::with_cause("stock reservation failed", app);

        assert_eq!(
            error_chain(&err),
            vec![
                "stock reservation failed",
                "repository error",
                "repository unavailable: timeout",
            ]
        );
    }

    #[test]
    fn transparent_domain_variant_adds_no_link() {
        let err: ApplicationError = DomainError::with_cause(
            "wrapper",
            std::io::Error::other("root"),
        )
        .into();
        assert_eq!(error_chain(&err), vec!["wrapper", "root"]);
    }

    /// Buffer the JSON formatter writes into.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(report: impl FnOnce()) -> Vec<Value> {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, report);

        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn not_found_is_logged_at_warn_with_fields() {
        let events = capture(|| {
            report_domain_failure(&DomainError::customer_not_found("cust-001"));
        });

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event["level"], "WARN");
        assert_eq!(event["fields"]["message"], "Customer not found: cust-001");
        assert_eq!(event["fields"]["code"], 2002);
        assert_eq!(event["fields"]["category"], "not_found");
        assert_eq!(
            event["fields"]["chain"],
            r#"["Customer not found: cust-001"]"#
        );
    }

    #[test]
    fn other_domain_failures_are_logged_at_error_with_chain() {
        let events = capture(|| {
            report_domain_failure(&DomainError::insufficient_stock("prod-001", 3, 1));
            report_domain_failure(&DomainError::with_cause(
                "reservation failed",
                RepositoryError::unavailable("down"),
            ));
        });

        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["level"], "ERROR");
        assert_eq!(events[0]["fields"]["code"], 3001);
        assert_eq!(events[0]["fields"]["category"], "business_rule");
        assert_eq!(events[1]["level"], "ERROR");
        assert_eq!(events[1]["fields"]["category"], "general");
        assert_eq!(
            events[1]["fields"]["chain"],
            r#"["reservation failed", "repository unavailable: down"]"#
        );
    }

    #[test]
    fn application_failures_carry_status() {
        let events = capture(|| {
            report_application_failure(&ApplicationError::validation("bad"));
            report_application_failure(&RepositoryError::unavailable("down").into());
            report_application_failure(&DomainError::product_not_found("prod-404").into());
        });

        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["level"], "WARN");
        assert_eq!(events[0]["fields"]["status"], 400);
        assert_eq!(events[0]["fields"]["code"], "VALIDATION_ERROR");
        assert_eq!(events[1]["level"], "ERROR");
        assert_eq!(events[1]["fields"]["status"], 500);
        assert_eq!(
            events[1]["fields"]["chain"],
            r#"["repository error", "repository unavailable: down"]"#
        );
        assert_eq!(events[2]["level"], "WARN");
        assert_eq!(events[2]["fields"]["category"], "not_found");
    }
}
