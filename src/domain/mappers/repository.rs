use crate::domain::external_apis::github::RawRepository;
use crate::domain::models::repository::DisplayRepository;

/// Maps API records to display records one by one, keeping length and order.
pub fn map_repositories<I>(raw_repositories: I) -> Vec<DisplayRepository>
where
    I: IntoIterator<Item = RawRepository>,
{
    raw_repositories
        .into_iter()
        .map(DisplayRepository::from)
        .collect()
}
