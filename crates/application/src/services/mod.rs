//! Application services

mod animation_player;
mod asset_service;
mod schedule_evaluator;

pub use animation_player::AnimationPlayer;
pub use asset_service::load_frames_or_placeholder;
pub use schedule_evaluator::ScheduleEvaluator;
