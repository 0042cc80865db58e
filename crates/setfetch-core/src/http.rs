//! Blocking HTTP GET over a libcurl easy handle.
//!
//! One request at a time, whole body buffered in memory. Status codes are
//! returned to the caller rather than turned into errors so that manifest and
//! image fetches can apply their own policy.

use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
/// Abort only when the transfer stalls below LOW_SPEED_LIMIT bytes/s for LOW_SPEED_TIME.
const LOW_SPEED_LIMIT: u32 = 1024;
const LOW_SPEED_TIME: Duration = Duration::from_secs(60);
const TOTAL_TIMEOUT: Duration = Duration::from_secs(3600);
const MAX_REDIRECTIONS: u32 = 10;

/// Status and full body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Performs a GET and buffers the body. Follows redirects.
///
/// Only transport failures (DNS, connect, timeout, invalid URL) are errors;
/// any HTTP status is returned in [`HttpResponse::status`].
pub fn get(url: &str) -> Result<HttpResponse, curl::Error> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTIONS)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.low_speed_limit(LOW_SPEED_LIMIT)?;
    easy.low_speed_time(LOW_SPEED_TIME)?;
    easy.timeout(TOTAL_TIMEOUT)?;
    easy.useragent(concat!("setfetch/", env!("CARGO_PKG_VERSION")))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url, status, bytes = body.len(), "GET finished");
    Ok(HttpResponse { status, body })
}
