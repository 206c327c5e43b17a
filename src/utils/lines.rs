//! Line reading for interactive input

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Read the next line, replacing invalid UTF-8 with U+FFFD.
///
/// Returns `None` once the input is closed.
pub async fn next_line<R>(input: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if input.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_bytes_do_not_end_the_stream() {
        let mut input: &[u8] = b"\xff\xfe\nskip\n";
        let mut buf = Vec::new();

        let first = next_line(&mut input, &mut buf).await.unwrap().unwrap();
        assert_eq!(first, "\u{fffd}\u{fffd}\n");
        let second = next_line(&mut input, &mut buf).await.unwrap();
        assert_eq!(second.as_deref(), Some("skip\n"));
        assert_eq!(next_line(&mut input, &mut buf).await.unwrap(), None);
    }
}
