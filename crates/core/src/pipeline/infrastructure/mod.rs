pub mod lookahead_sink;
pub mod threaded_replay_executor;
