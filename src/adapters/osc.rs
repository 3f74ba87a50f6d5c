//! OSC 1.0 wire codec and the UDP sender.
//!
//! Only the argument types the receiver understands are supported:
//! `s` (string), `f` (32-bit float) and `i` (32-bit int). Every message
//! travels in its own datagram; bundles are not used.

use crate::domain::model::{OscArg, OscMessage};
use crate::domain::ports::MessageSink;
use crate::utils::error::{Result, WordtoneError};
use async_trait::async_trait;
use tokio::net::{lookup_host, UdpSocket};

fn encode_error(message: impl Into<String>) -> WordtoneError {
    WordtoneError::EncodeError {
        message: message.into(),
    }
}

fn decode_error(message: impl Into<String>) -> WordtoneError {
    WordtoneError::DecodeError {
        message: message.into(),
    }
}

/// NUL 結尾並補齊到 4 bytes 的倍數
fn write_padded_str(buf: &mut Vec<u8>, s: &str) -> Result<()> {
    if s.contains('\0') {
        return Err(encode_error(format!("string contains NUL byte: {:?}", s)));
    }
    buf.extend_from_slice(s.as_bytes());
    buf.push(0);
    while buf.len() % 4 != 0 {
        buf.push(0);
    }
    Ok(())
}

pub fn encode(message: &OscMessage) -> Result<Vec<u8>> {
    if !message.address.starts_with('/') {
        return Err(encode_error(format!(
            "address must start with '/': {:?}",
            message.address
        )));
    }

    let mut buf = Vec::with_capacity(32);
    write_padded_str(&mut buf, &message.address)?;

    let type_tags: String = std::iter::once(',')
        .chain(message.args.iter().map(OscArg::type_tag))
        .collect();
    write_padded_str(&mut buf, &type_tags)?;

    for arg in &message.args {
        match arg {
            OscArg::Int(v) => buf.extend_from_slice(&v.to_be_bytes()),
            OscArg::Float(v) => buf.extend_from_slice(&v.to_be_bytes()),
            OscArg::Str(s) => write_padded_str(&mut buf, s)?,
        }
    }

    Ok(buf)
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn read_padded_str(&mut self) -> Result<String> {
        let rest = &self.data[self.pos..];
        let nul = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| decode_error("unterminated string"))?;
        let s = std::str::from_utf8(&rest[..nul])
            .map_err(|e| decode_error(format!("invalid UTF-8: {}", e)))?
            .to_string();

        let padded = (nul + 1).div_ceil(4) * 4;
        if padded > rest.len() {
            return Err(decode_error("string padding runs past end of packet"));
        }
        self.pos += padded;
        Ok(s)
    }

    fn read_word(&mut self) -> Result<[u8; 4]> {
        let end = self.pos + 4;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or_else(|| decode_error("argument runs past end of packet"))?;
        self.pos = end;
        let mut word = [0u8; 4];
        word.copy_from_slice(bytes);
        Ok(word)
    }
}

pub fn decode(data: &[u8]) -> Result<OscMessage> {
    let mut reader = Reader { data, pos: 0 };

    let address = reader.read_padded_str()?;
    if !address.starts_with('/') {
        return Err(decode_error(format!("bad address: {:?}", address)));
    }

    let type_tags = reader.read_padded_str()?;
    let tags = type_tags
        .strip_prefix(',')
        .ok_or_else(|| decode_error(format!("bad type tag string: {:?}", type_tags)))?;

    let mut args = Vec::with_capacity(tags.len());
    for tag in tags.chars() {
        let arg = match tag {
            'i' => OscArg::Int(i32::from_be_bytes(reader.read_word()?)),
            'f' => OscArg::Float(f32::from_be_bytes(reader.read_word()?)),
            's' => OscArg::Str(reader.read_padded_str()?),
            other => return Err(decode_error(format!("unsupported type tag '{}'", other))),
        };
        args.push(arg);
    }

    Ok(OscMessage { address, args })
}

/// UDP client connected to a single receiver. No handshake, no acknowledgement.
pub struct UdpOscSender {
    socket: UdpSocket,
}

impl UdpOscSender {
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        let target = lookup_host((host, port)).await?.next().ok_or_else(|| {
            WordtoneError::InvalidConfigValueError {
                field: "host".to_string(),
                value: host.to_string(),
                reason: "Host name did not resolve to any address".to_string(),
            }
        })?;

        let bind_addr = if target.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        let socket = UdpSocket::bind(bind_addr).await?;
        socket.connect(target).await?;

        tracing::debug!("OSC sender bound to {} -> {}", socket.local_addr()?, target);
        Ok(Self { socket })
    }
}

#[async_trait]
impl MessageSink for UdpOscSender {
    async fn send(&self, message: &OscMessage) -> Result<()> {
        let packet = encode(message)?;
        self.socket.send(&packet).await?;
        tracing::debug!("Sent {} {:?} ({} bytes)", message.address, message.args, packet.len());
        Ok(())
    }
}

/// Sink for `--dry-run`: encodes each message and prints it to stderr instead of sending it.
#[derive(Debug, Default)]
pub struct DryRunSink;

#[async_trait]
impl MessageSink for DryRunSink {
    async fn send(&self, message: &OscMessage) -> Result<()> {
        let packet = encode(message)?;
        eprintln!(
            "[dry-run] {} {:?} ({} bytes)",
            message.address,
            message.args,
            packet.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AudioParams, Relation};
    use std::time::Duration;

    #[test]
    fn test_encode_clear_has_empty_type_tags() {
        let packet = encode(&OscMessage::clear()).unwrap();
        assert_eq!(packet, b"/clear\0\0,\0\0\0".to_vec());
    }

    #[test]
    fn test_encode_word_message() {
        let packet = encode(&OscMessage::word(Relation::Synonym, "glad")).unwrap();
        assert_eq!(packet, b"/syn\0\0\0\0,s\0\0glad\0\0\0\0".to_vec());
    }

    #[test]
    fn test_encode_params_as_big_endian_floats() {
        let params = AudioParams {
            tempo: 88,
            density: 0.35,
            brightness: 0.4,
            pan: 0.0,
        };
        let packet = encode(&OscMessage::params(&params)).unwrap();

        assert_eq!(&packet[..8], b"/params\0");
        assert_eq!(&packet[8..16], b",ffff\0\0\0");
        assert_eq!(&packet[16..20], &88.0f32.to_be_bytes());
        assert_eq!(&packet[20..24], &0.35f32.to_be_bytes());
        assert_eq!(packet.len(), 32);
    }

    #[test]
    fn test_encode_rejects_bad_address() {
        let err = encode(&OscMessage::new("params", vec![])).unwrap_err();
        assert!(matches!(err, WordtoneError::EncodeError { .. }));
    }

    #[test]
    fn test_decode_reads_what_encode_writes() {
        let message = OscMessage::new(
            "/mixed",
            vec![
                OscArg::Int(-7),
                OscArg::Str("well-chosen".to_string()),
                OscArg::Float(0.5),
            ],
        );
        assert_eq!(decode(&encode(&message).unwrap()).unwrap(), message);
    }

    #[test]
    fn test_decode_rejects_truncated_packet() {
        let packet = encode(&OscMessage::params(&AudioParams {
            tempo: 100,
            density: 0.5,
            brightness: 0.5,
            pan: 0.0,
        }))
        .unwrap();

        assert!(decode(&packet[..20]).is_err());
        assert!(decode(b"/syn").is_err());
    }

    #[tokio::test]
    async fn test_udp_sender_delivers_datagram() {
        let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = receiver.local_addr().unwrap().port();

        let sender = UdpOscSender::connect("127.0.0.1", port).await.unwrap();
        sender
            .send(&OscMessage::word(Relation::Antonym, "sad"))
            .await
            .unwrap();

        let mut buf = [0u8; 1024];
        let len = tokio::time::timeout(Duration::from_secs(2), receiver.recv(&mut buf))
            .await
            .unwrap()
            .unwrap();

        let message = decode(&buf[..len]).unwrap();
        assert_eq!(message.address, "/ant");
        assert_eq!(message.args, vec![OscArg::Str("sad".to_string())]);
    }
}
