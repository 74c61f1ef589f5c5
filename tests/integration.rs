//! Integration test harness.

#[path = "integration/helpers.rs"]
mod helpers;

#[path = "integration/cli_test.rs"]
mod cli_test;
#[path = "integration/dataset_test.rs"]
mod dataset_test;
#[path = "integration/playback_test.rs"]
mod playback_test;
#[path = "integration/timeline_test.rs"]
mod timeline_test;
