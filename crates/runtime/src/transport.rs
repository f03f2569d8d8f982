//! Line-oriented connection to a player.
//!
//! A [`Transport`] wraps whatever protocol a player reaches the house through
//! (a terminal, a socket, a chat bridge). The session only ever sees whole
//! lines in and whole messages out.

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport closed by peer")]
    Closed,

    #[error("transport I/O failed")]
    Io(#[from] std::io::Error),
}

/// Capability for exchanging text with one player.
#[async_trait]
pub trait Transport: Send {
    /// Read the next line, without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD. Returns [`TransportError::Closed`] once the input is exhausted.
    async fn read_line(&mut self) -> Result<String, TransportError>;

    /// Deliver one message to the player.
    async fn write_message(&mut self, message: &str) -> Result<(), TransportError>;
}

/// Transport over a raw reader/writer pair with no formatting beyond a
/// trailing newline. Suitable for stdin/stdout, telnet-style sockets and
/// in-memory pipes.
pub struct RawTransport<R, W> {
    reader: BufReader<R>,
    writer: BufWriter<W>,
}

impl<R, W> RawTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer: BufWriter::new(writer),
        }
    }

    /// Flushes pending output and returns the underlying reader and writer.
    pub async fn into_inner(mut self) -> Result<(R, W), TransportError> {
        self.writer.flush().await?;
        Ok((self.reader.into_inner(), self.writer.into_inner()))
    }
}

#[async_trait]
impl<R, W> Transport for RawTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_line(&mut self) -> Result<String, TransportError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            return Err(TransportError::Closed);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_owned())
    }

    async fn write_message(&mut self, message: &str) -> Result<(), TransportError> {
        self.writer.write_all(message.as_bytes()).await?;
        if !message.ends_with('\n') {
            self.writer.write_all(b"\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_lines_until_closed() {
        let input: &[u8] = b"look Kitchen\r\ngo larry north\nlast";
        let mut transport = RawTransport::new(input, Vec::new());

        assert_eq!(transport.read_line().await.unwrap(), "look Kitchen");
        assert_eq!(transport.read_line().await.unwrap(), "go larry north");
        assert_eq!(transport.read_line().await.unwrap(), "last");
        assert!(matches!(
            transport.read_line().await,
            Err(TransportError::Closed)
        ));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced_not_fatal() {
        let input: &[u8] = b"look \xff\xfe\r\nhelp\n";
        let mut transport = RawTransport::new(input, Vec::new());

        assert_eq!(transport.read_line().await.unwrap(), "look \u{FFFD}\u{FFFD}");
        assert_eq!(transport.read_line().await.unwrap(), "help");
        assert!(matches!(
            transport.read_line().await,
            Err(TransportError::Closed)
        ));
    }

    #[tokio::test]
    async fn test_messages_are_newline_terminated() {
        let mut transport = RawTransport::new(tokio::io::empty(), Vec::new());
        transport.write_message("one").await.unwrap();
        transport.write_message("two\n").await.unwrap();

        let (_, written) = transport.into_inner().await.unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), "one\ntwo\n");
    }
}
