use serde::{Deserialize, Serialize};

/// Inbound WebSocket envelope: `{"type": ..., "data": {...}}`.
///
/// Anything that does not parse into one of these variants (unknown
/// type tag, missing fields, garbage text) is dropped by the dispatcher
/// without a reply and without closing the connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ClientMessage {
    PlacePiece(PlacePieceRequest),
    RotatePiece(RotatePieceRequest),
}

/// Payload of a `place_piece` message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacePieceRequest {
    /// 0/1 cell matrix, rows top-to-bottom.
    pub shape: Vec<Vec<u8>>,
    /// Grid coordinates of the shape's top-left corner. May be negative.
    pub position: Position,
    /// Color the cells will be painted with, taken from the client as-is.
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Payload of a `rotate_piece` message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotatePieceRequest {
    pub shape: Vec<Vec<u8>>,
}

/// Body of `POST /api/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place_piece() {
        let text = r##"{
            "type": "place_piece",
            "data": {
                "shape": [[1, 1], [1, 1]],
                "position": {"x": 3, "y": -1},
                "color": "#FFFF00"
            }
        }"##;

        let message: ClientMessage = serde_json::from_str(text).unwrap();
        match message {
            ClientMessage::PlacePiece(request) => {
                assert_eq!(request.shape, vec![vec![1, 1], vec![1, 1]]);
                assert_eq!(request.position, Position { x: 3, y: -1 });
                assert_eq!(request.color, "#FFFF00");
            }
            other => panic!("parsed wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rotate_piece() {
        let text = r#"{"type": "rotate_piece", "data": {"shape": [[1, 1, 1, 1]]}}"#;

        let message: ClientMessage = serde_json::from_str(text).unwrap();
        assert!(matches!(message, ClientMessage::RotatePiece(_)));
    }

    #[test]
    fn test_unknown_type_fails_to_parse() {
        let text = r#"{"type": "chat", "data": {"text": "hi"}}"#;
        assert!(serde_json::from_str::<ClientMessage>(text).is_err());
    }

    #[test]
    fn test_missing_fields_fail_to_parse() {
        let text = r#"{"type": "place_piece", "data": {"shape": [[1]]}}"#;
        assert!(serde_json::from_str::<ClientMessage>(text).is_err());
    }

    #[test]
    fn test_garbage_fails_to_parse() {
        assert!(serde_json::from_str::<ClientMessage>("not json").is_err());
        assert!(serde_json::from_str::<ClientMessage>("{}").is_err());
    }
}
