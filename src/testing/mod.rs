mod recording_runtime;

pub use fake_juju_client::FakeJujuClient;
pub use recording_client::{ClientCall, RecordingClient};
pub use recording_runtime::{RecordingRuntime, RuntimeCall};
