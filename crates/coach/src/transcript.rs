// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use promo_master_domain::UserIdentity;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Coach,
}

/// A single entry in the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Ordered conversation history for one coaching session.
///
/// New sessions start with a personalized greeting attributed to the coach.
/// Replies are appended verbatim; the transcript never rewrites or reorders
/// what either side said.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Starts a transcript seeded with the greeting for `identity`.
    #[must_use]
    pub fn for_identity(identity: &UserIdentity) -> Self {
        let greeting = format!(
            "Welcome, {}! I am your strategy coach for the 2026 promotion \
             season. I will suggest the best path for your current rank \
             ({}). What would you like to know?",
            identity.display_name,
            identity.rank.as_str()
        );
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Coach,
                text: greeting,
            }],
        }
    }

    /// Appends a question from the member.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: text.into(),
        });
    }

    /// Appends a coach reply verbatim.
    pub fn push_coach(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: ChatRole::Coach,
            text: text.into(),
        });
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
