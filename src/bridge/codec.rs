/*!
 * Bridge Command Codec
 *
 * Decodes the string-based bridge protocol into a tagged command type,
 * resolved once before dispatch. The protocol is deliberately permissive:
 * unknown command names and malformed or insufficient arguments decode to
 * nothing and the request becomes a no-op, so hosted content built against
 * a different protocol version degrades gracefully instead of failing.
 */

use crate::platform::syslog::PlatformLogLevel;
use log::debug;

/// Close-callback registration notifications from hosted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseNotify {
    DidSetCallback,
    DidClearCallback,
    DidRunCallback,
}

impl CloseNotify {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "didSetOnCloseCallback" => Some(Self::DidSetCallback),
            "didClearOnCloseCallback" => Some(Self::DidClearCallback),
            "didRunOnCloseCallback" => Some(Self::DidRunCallback),
            _ => None,
        }
    }
}

/// A validated bridge request. Argument counts and numeric parses are
/// checked here; handlers never index into a raw argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeCommand {
    Initialize,
    Country,
    Locale,
    LocaleRegion,
    /// Accepted under both "identifier" and "getIdentifier"
    Identifier,
    ScreenOrientation,
    CurrentCountryGroup,
    IsMinimal,
    IsActivated,
    IsKeyboardVisible,
    CursorVisibility,
    Activate,
    Deactivate,
    Hide,
    StageReady,
    PlatformBack,
    UpdateLaunchParams {
        params: String,
    },
    SetWindowProperty {
        name: String,
        value: String,
    },
    SetCursor {
        shape: String,
        hotspot_x: i32,
        hotspot_y: i32,
    },
    SetInputRegion {
        region: Vec<u8>,
    },
    SetKeyMask {
        mask: Vec<u8>,
    },
    FocusOwner,
    FocusLayer,
    SetLoadErrorPolicy {
        policy: String,
    },
    OnCloseNotify {
        event: CloseNotify,
    },
    KeepAlive {
        enable: bool,
    },
    LogInfoWithClock {
        msg_id: String,
        perf_type: String,
        perf_group: String,
    },
    LogString {
        level: PlatformLogLevel,
        msg_id: String,
        key: String,
        message: String,
    },
    ServiceCall {
        url: String,
        payload: String,
    },
}

impl BridgeCommand {
    /// Decode a raw request. `None` means the request is ignored, whether
    /// the name is unknown or the arguments do not validate.
    pub fn decode(command: &str, args: &[String]) -> Option<BridgeCommand> {
        let decoded = match command {
            "initialize" => Some(Self::Initialize),
            "country" => Some(Self::Country),
            "locale" => Some(Self::Locale),
            "localeRegion" => Some(Self::LocaleRegion),
            "identifier" | "getIdentifier" => Some(Self::Identifier),
            "screenOrientation" => Some(Self::ScreenOrientation),
            "currentCountryGroup" => Some(Self::CurrentCountryGroup),
            "isMinimal" => Some(Self::IsMinimal),
            "isActivated" => Some(Self::IsActivated),
            "isKeyboardVisible" => Some(Self::IsKeyboardVisible),
            "cursorVisibility" => Some(Self::CursorVisibility),
            "activate" => Some(Self::Activate),
            "deactivate" => Some(Self::Deactivate),
            "hide" => Some(Self::Hide),
            "stageReady" => Some(Self::StageReady),
            "platformBack" => Some(Self::PlatformBack),
            "launchParams" => args.first().map(|params| Self::UpdateLaunchParams {
                params: params.clone(),
            }),
            "setWindowProperty" => match args {
                [name, value, ..] => Some(Self::SetWindowProperty {
                    name: name.clone(),
                    value: value.clone(),
                }),
                _ => None,
            },
            "setCursor" => match args {
                [shape, x, y] => match (x.parse(), y.parse()) {
                    (Ok(hotspot_x), Ok(hotspot_y)) => Some(Self::SetCursor {
                        shape: shape.clone(),
                        hotspot_x,
                        hotspot_y,
                    }),
                    _ => None,
                },
                _ => None,
            },
            "setInputRegion" => Some(Self::SetInputRegion {
                region: concat_args(args),
            }),
            "setKeyMask" => Some(Self::SetKeyMask {
                mask: concat_args(args),
            }),
            "focusOwner" => Some(Self::FocusOwner),
            "focusLayer" => Some(Self::FocusLayer),
            "setLoadErrorPolicy" => args.first().map(|policy| Self::SetLoadErrorPolicy {
                policy: policy.clone(),
            }),
            "onCloseNotify" => args
                .first()
                .and_then(|raw| CloseNotify::parse(raw))
                .map(|event| Self::OnCloseNotify { event }),
            "keepAlive" => args.first().map(|flag| Self::KeepAlive {
                enable: flag == "true",
            }),
            "PmLogInfoWithClock" => match args {
                [msg_id, perf_type, perf_group] => Some(Self::LogInfoWithClock {
                    msg_id: msg_id.clone(),
                    perf_type: perf_type.clone(),
                    perf_group: perf_group.clone(),
                }),
                _ => None,
            },
            "PmLogString" => match args {
                [level, msg_id, key, message, ..] => level
                    .parse()
                    .ok()
                    .and_then(PlatformLogLevel::from_raw)
                    .map(|level| Self::LogString {
                        level,
                        msg_id: msg_id.clone(),
                        key: key.clone(),
                        message: message.clone(),
                    }),
                _ => None,
            },
            "serviceCall" => match args {
                [url, payload, ..] => Some(Self::ServiceCall {
                    url: url.clone(),
                    payload: payload.clone(),
                }),
                _ => None,
            },
            _ => None,
        };

        if decoded.is_none() {
            debug!(
                "ignored bridge command {:?} with {} argument(s)",
                command,
                args.len()
            );
        }
        decoded
    }
}

/// Variadic byte-blob arguments arrive as strings and are concatenated.
fn concat_args(args: &[String]) -> Vec<u8> {
    let mut data = Vec::new();
    for arg in args {
        data.extend_from_slice(arg.as_bytes());
    }
    data
}
