pub mod member_accessors;
pub mod team_page_cache;
pub mod translator;
