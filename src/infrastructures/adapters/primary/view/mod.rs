mod language;
mod project;
mod project_list;

pub use language::LanguageBadge;
pub use project::{Header, HomepageLink, StatsBlock, Tile, is_last_in_row, render_html};
pub use project_list::{MountError, ProjectListState, ProjectListView};
