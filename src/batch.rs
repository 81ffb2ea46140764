//! Batch driver: strictly sequential lookups with an inter-request delay.

use std::time::Duration;

use tokio::time::sleep;

use crate::lookup::{BreachClient, ProgressEnv};
use crate::records::LookupResults;

/// Look up every email in `emails`, in input order, sleeping `delay` between
/// successive calls (n-1 delays for n emails).
///
/// The delay is a hard contract with the upstream free tier, which enforces a
/// minimum spacing between requests; shortening it raises the error-outcome
/// rate. It is not adaptive to response codes.
///
/// Duplicate emails are looked up once per occurrence; the returned mapping
/// retains the last outcome per key. Every email ends up as a key, whatever
/// its outcome.
pub async fn check_many<E: ProgressEnv + ?Sized>(
    client: &BreachClient,
    emails: &[String],
    api_key: &str,
    delay: Duration,
    env: &E,
) -> LookupResults {
    let mut results = LookupResults::new();
    for (idx, email) in emails.iter().enumerate() {
        let outcome = client.lookup(email, api_key, env).await;
        results.insert(email.clone(), outcome);
        if idx + 1 < emails.len() {
            sleep(delay).await;
        }
    }
    results
}
