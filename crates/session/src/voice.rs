//! Voice command parsing.
//!
//! A recognizer hands over a transcript; the first keyword it contains,
//! checked in table order, decides the command.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceCommand {
    Next,
    Previous,
    ReadDetails,
    AddToWishlist,
    ToggleMode,
}

/// Keyword substrings in match priority order
const KEYWORDS: [(&str, VoiceCommand); 6] = [
    ("next", VoiceCommand::Next),
    ("previous", VoiceCommand::Previous),
    ("read", VoiceCommand::ReadDetails),
    ("details", VoiceCommand::ReadDetails),
    ("wishlist", VoiceCommand::AddToWishlist),
    ("toggle mode", VoiceCommand::ToggleMode),
];

impl VoiceCommand {
    pub const ALL: [VoiceCommand; 5] = [
        VoiceCommand::Next,
        VoiceCommand::Previous,
        VoiceCommand::ReadDetails,
        VoiceCommand::AddToWishlist,
        VoiceCommand::ToggleMode,
    ];

    /// Map a transcript to a command; `None` for anything unrecognized.
    pub fn parse(transcript: &str) -> Option<Self> {
        let transcript = transcript.trim().to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| transcript.contains(keyword))
            .map(|&(_, command)| command)
    }

    /// Help line shown next to the list
    pub fn hint(&self) -> &'static str {
        match self {
            VoiceCommand::Next => "\"Next\" to move down the list",
            VoiceCommand::Previous => "\"Previous\" to move up the list",
            VoiceCommand::ReadDetails => "\"Read details\" for audio description",
            VoiceCommand::AddToWishlist => "\"Add to wishlist\" to save movie",
            VoiceCommand::ToggleMode => "\"Toggle mode\" to switch high-contrast",
        }
    }
}

impl fmt::Display for VoiceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VoiceCommand::Next => "next",
            VoiceCommand::Previous => "previous",
            VoiceCommand::ReadDetails => "read details",
            VoiceCommand::AddToWishlist => "add to wishlist",
            VoiceCommand::ToggleMode => "toggle mode",
        };
        f.write_str(name)
    }
}
