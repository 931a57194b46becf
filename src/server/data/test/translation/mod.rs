use crate::server::data::translation::TranslationRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::translation::create_translation};

mod insert_missing;
mod set_ar_text;
