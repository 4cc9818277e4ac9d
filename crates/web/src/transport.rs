use http::header::UPGRADE;
use http::Request;

/// How a request is carried once the handler has accepted it.
///
/// Only [`TransportKind::Http`] responses are given security headers; an upgraded
/// connection switches protocols and its handshake response is forwarded untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Http,
    WebSocket,
}

impl TransportKind {
    pub fn of<B>(req: &Request<B>) -> Self {
        let websocket = req
            .headers()
            .get_all(UPGRADE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .any(|protocol| protocol.trim().eq_ignore_ascii_case("websocket"));

        if websocket { Self::WebSocket } else { Self::Http }
    }

    pub fn is_http(self) -> bool {
        self == Self::Http
    }
}
