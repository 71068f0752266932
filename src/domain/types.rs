use serde::{Deserialize, Serialize};

/// Who produced a turn. The variants serialize to the literal Gemini wire
/// roles, so no mapping layer is needed when building a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

impl TurnRole {
    pub fn as_str(self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Model => "model",
        }
    }
}

/// A single utterance in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            text: text.into(),
        }
    }
}

/// The fixed two-turn pair every session starts from: a system-priming user
/// turn establishing the assistant's persona and its canned acknowledgment.
/// Replayed to the model on every request, so the persona survives without a
/// separate system instruction.
pub fn seed_conversation() -> Vec<ChatTurn> {
    vec![
        ChatTurn::user(
            "Kamu adalah chatbot asisten kesehatan wanita yang profesional, ramah, dan menjaga \
             kerahasiaan. Tugasmu adalah membantu pengguna perempuan memahami kondisi \
             kesehatannya, memberikan saran awal yang aman, dan mengarahkan ke dokter jika \
             diperlukan. Jangan pernah memberikan diagnosis pasti atau resep obat tanpa \
             konfirmasi dokter.",
        ),
        ChatTurn::model(
            "Baik! Saya siap membantu Anda. Silakan sampaikan keluhan yang Anda rasakan.",
        ),
    ]
}
