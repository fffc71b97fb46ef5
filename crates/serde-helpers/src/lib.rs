#![feature(
    never_type,
    option_get_or_insert_default,
    const_trait_impl,
    const_option,
    const_mut_refs,
    backtrace,
    round_char_boundary
)]
#![allow(stable_features)]

pub mod borrow;
pub mod debug_visitor;
pub mod display_error;
pub mod display_serialize;
pub mod empty_to_option;
pub mod find_key;
pub mod flat_map_ser;
pub mod from_str;
pub mod inline_str_dst;
pub mod key_capture;
pub mod kvp;
pub mod map_error;
pub mod match_kvp;
pub mod never_visitor;
pub mod optional_visitor;
pub mod seeded_key_capture;
pub mod string_dst;
pub mod string_or_value;
