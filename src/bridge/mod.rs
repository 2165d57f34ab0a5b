/*!
 * Bridge Module
 * Command codec and dispatcher for the hosted-content control channel
 */

pub mod codec;
pub mod dispatcher;

pub use codec::{BridgeCommand, CloseNotify};
pub use dispatcher::BridgeDispatcher;
