/*!
 * Command Codec Tests
 * Decode validation: permissive protocol, argument arity, numeric parses
 */

use pretty_assertions::assert_eq;
use webapp_host::bridge::codec::{BridgeCommand, CloseNotify};
use webapp_host::platform::syslog::PlatformLogLevel;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn unknown_command_decodes_to_nothing() {
    assert_eq!(BridgeCommand::decode("teleport", &[]), None);
    assert_eq!(
        BridgeCommand::decode("teleport", &args(&["anywhere"])),
        None
    );
}

#[test]
fn queries_decode_without_arguments() {
    assert_eq!(
        BridgeCommand::decode("initialize", &[]),
        Some(BridgeCommand::Initialize)
    );
    assert_eq!(
        BridgeCommand::decode("country", &[]),
        Some(BridgeCommand::Country)
    );
    assert_eq!(
        BridgeCommand::decode("cursorVisibility", &[]),
        Some(BridgeCommand::CursorVisibility)
    );
}

#[test]
fn identifier_alias_resolves_to_single_command() {
    assert_eq!(
        BridgeCommand::decode("identifier", &[]),
        Some(BridgeCommand::Identifier)
    );
    assert_eq!(
        BridgeCommand::decode("getIdentifier", &[]),
        Some(BridgeCommand::Identifier)
    );
}

#[test]
fn insufficient_arguments_are_ignored() {
    assert_eq!(BridgeCommand::decode("launchParams", &[]), None);
    assert_eq!(
        BridgeCommand::decode("setWindowProperty", &args(&["title"])),
        None
    );
    assert_eq!(BridgeCommand::decode("serviceCall", &args(&["luna://x"])), None);
    assert_eq!(
        BridgeCommand::decode("PmLogInfoWithClock", &args(&["id", "type"])),
        None
    );
    assert_eq!(
        BridgeCommand::decode("PmLogString", &args(&["6", "id", "key"])),
        None
    );
    assert_eq!(BridgeCommand::decode("onCloseNotify", &[]), None);
    assert_eq!(BridgeCommand::decode("keepAlive", &[]), None);
}

#[test]
fn set_cursor_requires_three_numeric_capable_arguments() {
    assert_eq!(
        BridgeCommand::decode("setCursor", &args(&["pointer", "10", "20"])),
        Some(BridgeCommand::SetCursor {
            shape: "pointer".into(),
            hotspot_x: 10,
            hotspot_y: 20,
        })
    );
    // Parse failure on the second argument makes the command a no-op
    assert_eq!(
        BridgeCommand::decode("setCursor", &args(&["pointer", "abc", "20"])),
        None
    );
    assert_eq!(BridgeCommand::decode("setCursor", &args(&["pointer"])), None);
    assert_eq!(
        BridgeCommand::decode("setCursor", &args(&["pointer", "1", "2", "3"])),
        None
    );
}

#[test]
fn close_notify_values_parse_and_unknown_is_dropped() {
    assert_eq!(
        BridgeCommand::decode("onCloseNotify", &args(&["didSetOnCloseCallback"])),
        Some(BridgeCommand::OnCloseNotify {
            event: CloseNotify::DidSetCallback
        })
    );
    assert_eq!(
        BridgeCommand::decode("onCloseNotify", &args(&["didClearOnCloseCallback"])),
        Some(BridgeCommand::OnCloseNotify {
            event: CloseNotify::DidClearCallback
        })
    );
    assert_eq!(
        BridgeCommand::decode("onCloseNotify", &args(&["didRunOnCloseCallback"])),
        Some(BridgeCommand::OnCloseNotify {
            event: CloseNotify::DidRunCallback
        })
    );
    assert_eq!(
        BridgeCommand::decode("onCloseNotify", &args(&["didSomethingElse"])),
        None
    );
}

#[test]
fn keep_alive_is_true_only_for_the_literal_true() {
    assert_eq!(
        BridgeCommand::decode("keepAlive", &args(&["true"])),
        Some(BridgeCommand::KeepAlive { enable: true })
    );
    assert_eq!(
        BridgeCommand::decode("keepAlive", &args(&["yes"])),
        Some(BridgeCommand::KeepAlive { enable: false })
    );
}

#[test]
fn variadic_blob_arguments_concatenate() {
    assert_eq!(
        BridgeCommand::decode("setInputRegion", &args(&["ab", "cd", "ef"])),
        Some(BridgeCommand::SetInputRegion {
            region: b"abcdef".to_vec()
        })
    );
    assert_eq!(
        BridgeCommand::decode("setKeyMask", &[]),
        Some(BridgeCommand::SetKeyMask { mask: Vec::new() })
    );
}

#[test]
fn log_string_level_must_be_a_known_numeric() {
    assert_eq!(
        BridgeCommand::decode("PmLogString", &args(&["3", "APP", "key", "message"])),
        Some(BridgeCommand::LogString {
            level: PlatformLogLevel::Error,
            msg_id: "APP".into(),
            key: "key".into(),
            message: "message".into(),
        })
    );
    assert_eq!(
        BridgeCommand::decode("PmLogString", &args(&["99", "APP", "key", "message"])),
        None
    );
    assert_eq!(
        BridgeCommand::decode("PmLogString", &args(&["warn", "APP", "key", "message"])),
        None
    );
}
