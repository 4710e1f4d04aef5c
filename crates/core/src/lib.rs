pub mod alignment {
    pub mod alignment_engine;
    pub mod domain {
        pub mod alignment_state;
        pub mod alignment_strategy;
        pub mod match_run;
        pub mod token_matcher;
        pub mod window_tracker;
    }
    pub mod infrastructure;
}

pub mod commands {
    pub mod domain {
        pub mod hypothesis_filter;
        pub mod voice_command;
    }
}

pub mod pipeline {
    pub mod infrastructure;
    pub mod presentation_sink;
    pub mod prompter_session;
    pub mod replay_executor;
    pub mod session_logger;
}

pub mod script {
    pub mod domain {
        pub mod script_token;
        pub mod script_tokenizer;
    }
}

pub mod shared {
    pub mod config;
    pub mod constants;
    pub mod text;
}

pub mod transcript {
    pub mod domain {
        pub mod hypothesis;
        pub mod hypothesis_source;
        pub mod transcript_normalizer;
    }
    pub mod infrastructure;
}
