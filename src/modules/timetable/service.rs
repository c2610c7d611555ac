use tracing::instrument;

use slateport_core::{Listing, PortalError};
use slateport_models::timetable::{
    TimetableEntry, TimetableFilter, WeekTimetable, group_by_day,
};

use crate::client::ApiClient;
use crate::fixtures;

pub struct TimetableService;

impl TimetableService {
    /// `GET /timetable`
    #[instrument(skip(client))]
    pub async fn list(
        client: &ApiClient,
        filter: &TimetableFilter,
    ) -> Result<Listing<TimetableEntry>, PortalError> {
        client
            .fetch_list(
                "timetable",
                "/timetable",
                &filter.to_query(),
                TimetableEntry::from_payload,
                fixtures::timetable::sample,
            )
            .await
    }

    /// The week grouped per day, for schedule screens.
    #[instrument(skip(client))]
    pub async fn list_by_day(
        client: &ApiClient,
        filter: &TimetableFilter,
    ) -> Result<WeekTimetable, PortalError> {
        let listing = Self::list(client, filter).await?;
        Ok(WeekTimetable {
            days: group_by_day(&listing.items),
            source: listing.source,
        })
    }
}
