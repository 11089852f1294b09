mod fake_test_engine;
mod memory_service_fs;
mod recording_environment;

pub use fake_test_engine::FakeTestEngine;
pub use memory_service_fs::MemoryServiceFs;
pub use recording_environment::RecordingEnvironment;
pub use scripted_prompter::ScriptedPrompter;
