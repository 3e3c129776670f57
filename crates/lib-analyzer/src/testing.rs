//! Scripted transport for protocol tests.

use crate::error::ProtocolError;
use crate::transport::LineTransport;
use std::collections::VecDeque;

/// A [`LineTransport`] that replays a canned response script and records
/// every command sent. An exhausted script behaves like a silent device
/// (read timeout).
pub struct ScriptedLink {
    pub sent: Vec<String>,
    pub responses: VecDeque<String>,
}

impl ScriptedLink {
    pub fn new(responses: &[&str]) -> Self {
        Self {
            sent: Vec::new(),
            responses: responses.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LineTransport for ScriptedLink {
    fn send_line(&mut self, line: &str) -> Result<(), ProtocolError> {
        self.sent.push(line.to_string());
        Ok(())
    }

    fn recv_line(&mut self) -> Result<String, ProtocolError> {
        self.responses.pop_front().ok_or(ProtocolError::Timeout)
    }
}
