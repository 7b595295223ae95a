// libs/appointment-cell/src/services/detail.rs
use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

use doctor_cell::models::DoctorCard;
use doctor_cell::services::filter::related_doctors;
use shared_database::DoctorDirectory;
use shared_models::doctor::Doctor;

use crate::error::AppointmentError;
use crate::models::{
    BookingReceipt, DayBucket, DayTab, DetailPage, DoctorProfile, RelatedSection, Slot, SlotButton,
    SlotReservation, BOOK_LABEL, DAYS_OF_WEEK, RELATED_TITLE,
};
use crate::services::booking::BookingHandler;
use crate::services::slots::generate_slots;

/// Lifecycle of the doctor detail page.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Directory not available yet.
    Loading,
    /// Directory loaded but no doctor carries the requested id.
    NotFound(String),
    Ready(DetailSession),
}

pub struct DetailView;

impl DetailView {
    /// Resolves `doctor_id` against the directory and, on success, computes
    /// the slot buckets for `now` and the related doctors.
    pub fn resolve(directory: Option<&DoctorDirectory>, doctor_id: &str, now: NaiveDateTime) -> DetailState {
        let Some(directory) = directory else {
            return DetailState::Loading;
        };

        match directory.find(doctor_id) {
            Some(doctor) => DetailState::Ready(DetailSession::new(
                doctor.clone(),
                directory,
                now,
            )),
            None => {
                debug!("Doctor {} not found in directory", doctor_id);
                DetailState::NotFound(doctor_id.to_string())
            }
        }
    }
}

/// A resolved detail page and its selection state.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSession {
    doctor: Doctor,
    currency_symbol: String,
    buckets: Vec<DayBucket>,
    related: Vec<Doctor>,
    day_index: usize,
    slot_time: Option<String>,
}

impl DetailSession {
    pub fn new(doctor: Doctor, directory: &DoctorDirectory, now: NaiveDateTime) -> Self {
        let related = related_doctors(directory.doctors(), &doctor.speciality, &doctor.id)
            .into_iter()
            .cloned()
            .collect();

        Self {
            currency_symbol: directory.currency_symbol().to_string(),
            buckets: generate_slots(now),
            related,
            doctor,
            day_index: 0,
            slot_time: None,
        }
    }

    pub fn doctor(&self) -> &Doctor {
        &self.doctor
    }

    pub fn buckets(&self) -> &[DayBucket] {
        &self.buckets
    }

    pub fn related(&self) -> &[Doctor] {
        &self.related
    }

    pub fn day_index(&self) -> usize {
        self.day_index
    }

    pub fn slot_time(&self) -> Option<&str> {
        self.slot_time.as_deref()
    }

    /// Switches the day strip. Any previously chosen slot is cleared since it
    /// belongs to the old day.
    pub fn select_day(&mut self, index: usize) -> Result<(), AppointmentError> {
        if index >= self.buckets.len() {
            return Err(AppointmentError::InvalidDay {
                index,
                available: self.buckets.len(),
            });
        }

        if index != self.day_index {
            self.slot_time = None;
        }
        self.day_index = index;
        Ok(())
    }

    /// Selects a slot by its label within the current day.
    pub fn select_slot(&mut self, time: &str) -> Result<(), AppointmentError> {
        if !self.current_bucket().iter().any(|slot| slot.time == time) {
            return Err(AppointmentError::UnknownSlot(time.to_string()));
        }

        self.slot_time = Some(time.to_string());
        Ok(())
    }

    pub fn selected_slot(&self) -> Option<&Slot> {
        let time = self.slot_time.as_deref()?;
        self.current_bucket().iter().find(|slot| slot.time == time)
    }

    pub async fn book(&self, handler: &dyn BookingHandler) -> Result<BookingReceipt, AppointmentError> {
        let slot = self.selected_slot().ok_or(AppointmentError::NoSlotSelected)?;

        let reservation = SlotReservation {
            doctor_id: self.doctor.id.clone(),
            doctor_name: self.doctor.name.clone(),
            datetime: slot.datetime,
            time: slot.time.clone(),
            fees: self.doctor.fees,
            currency_symbol: self.currency_symbol.clone(),
        };

        Ok(handler.book(reservation).await?)
    }

    pub fn render(&self) -> DetailPage {
        let days = self
            .buckets
            .iter()
            .enumerate()
            .map(|(index, bucket)| {
                let first = bucket.first();
                DayTab {
                    index,
                    weekday: first.map(|slot| {
                        DAYS_OF_WEEK[slot.datetime.weekday().num_days_from_sunday() as usize]
                    }),
                    day_of_month: first.map(|slot| slot.datetime.day()),
                    slot_count: bucket.len(),
                    selected: index == self.day_index,
                }
            })
            .collect();

        let slots = self
            .current_bucket()
            .iter()
            .map(|slot| SlotButton {
                time: slot.time.clone(),
                datetime: slot.datetime,
                selected: self.slot_time.as_deref() == Some(slot.time.as_str()),
            })
            .collect();

        DetailPage {
            doctor: DoctorProfile::new(&self.doctor, &self.currency_symbol),
            days,
            selected_day: self.day_index,
            slots,
            selected_slot: self.slot_time.clone(),
            book_label: BOOK_LABEL,
            related: RelatedSection {
                title: RELATED_TITLE,
                subtitle: format!("Browse through other {} doctors.", self.doctor.speciality),
                doctors: self.related.iter().map(DoctorCard::from).collect(),
            },
        }
    }

    fn current_bucket(&self) -> &[Slot] {
        self.buckets
            .get(self.day_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use shared_utils::test_utils::{at, test_directory};

    use crate::error::BookingError;
    use crate::models::BookingStatus;
    use crate::services::booking::LoggingBookingHandler;

    fn session(doctor_id: &str, now: NaiveDateTime) -> DetailSession {
        let directory = test_directory();
        match DetailView::resolve(Some(&directory), doctor_id, now) {
            DetailState::Ready(session) => session,
            other => panic!("expected ready state, got {:?}", other),
        }
    }

    struct RejectingHandler;

    #[async_trait::async_trait]
    impl BookingHandler for RejectingHandler {
        async fn book(&self, _reservation: SlotReservation) -> Result<BookingReceipt, BookingError> {
            Err(BookingError::Rejected("slot already taken".to_string()))
        }
    }

    #[test]
    fn test_resolve_states() {
        let directory = test_directory();
        let now = at(2024, 5, 6, 9, 0);

        assert_eq!(DetailView::resolve(None, "doc1", now), DetailState::Loading);
        assert_eq!(
            DetailView::resolve(Some(&directory), "doc99", now),
            DetailState::NotFound("doc99".to_string())
        );
        assert_matches!(DetailView::resolve(Some(&directory), "doc1", now), DetailState::Ready(_));
    }

    #[test]
    fn test_ready_session_excludes_viewed_doctor() {
        let session = session("doc1", at(2024, 5, 6, 9, 0));
        let related: Vec<&str> = session.related().iter().map(|d| d.id.as_str()).collect();

        assert_eq!(related, vec!["doc7"]);
        assert_eq!(session.buckets().len(), 7);
        assert_eq!(session.day_index(), 0);
        assert_eq!(session.slot_time(), None);
    }

    #[test]
    fn test_select_slot_then_change_day_clears_selection() {
        let mut session = session("doc2", at(2024, 5, 6, 9, 0));

        session.select_slot("10:30 AM").unwrap();
        assert_eq!(session.selected_slot().map(|s| s.datetime), Some(at(2024, 5, 6, 10, 30)));

        session.select_day(0).unwrap();
        assert_eq!(session.slot_time(), Some("10:30 AM"));

        session.select_day(3).unwrap();
        assert_eq!(session.slot_time(), None);
    }

    #[test]
    fn test_invalid_selections_are_rejected() {
        let mut session = session("doc2", at(2024, 5, 6, 15, 0));

        assert_eq!(
            session.select_day(7),
            Err(AppointmentError::InvalidDay { index: 7, available: 7 })
        );
        // Today starts at 16:00, so a morning slot is not offered.
        assert_eq!(
            session.select_slot("10:00 AM"),
            Err(AppointmentError::UnknownSlot("10:00 AM".to_string()))
        );
    }

    #[test]
    fn test_render_detail_page() {
        let mut session = session("doc5", at(2024, 5, 6, 20, 45));
        session.select_day(1).unwrap();
        session.select_slot("11:00 AM").unwrap();

        let page = session.render();

        assert_eq!(page.doctor.fee_label, "$ 50");
        assert_eq!(page.days.len(), 7);
        // Monday evening: today is empty and carries no labels.
        assert_eq!(page.days[0].weekday, None);
        assert_eq!(page.days[0].day_of_month, None);
        assert_eq!(page.days[1].weekday, Some("TUE"));
        assert_eq!(page.days[1].day_of_month, Some(7));
        assert!(page.days[1].selected);
        assert_eq!(page.slots.len(), 22);
        assert_eq!(page.slots.iter().filter(|s| s.selected).count(), 1);
        assert_eq!(page.selected_slot.as_deref(), Some("11:00 AM"));
        assert_eq!(page.related.subtitle, "Browse through other Neurologist doctors.");
        assert_eq!(page.related.doctors.len(), 1);
        assert_eq!(page.related.doctors[0].id, "doc6");
    }

    #[test]
    fn test_render_empty_selected_day() {
        let page = session("doc3", at(2024, 5, 6, 22, 0)).render();
        assert!(page.slots.is_empty());
        assert!(page.related.doctors.is_empty());
    }

    #[tokio::test]
    async fn test_book_requires_selected_slot() {
        let session = session("doc1", at(2024, 5, 6, 9, 0));
        let result = session.book(&LoggingBookingHandler).await;
        assert_eq!(result, Err(AppointmentError::NoSlotSelected));
    }

    #[tokio::test]
    async fn test_book_hands_slot_to_handler() {
        let mut session = session("doc1", at(2024, 5, 6, 9, 0));
        session.select_day(2).unwrap();
        session.select_slot("02:00 PM").unwrap();

        let receipt = session.book(&LoggingBookingHandler).await.unwrap();
        assert_eq!(receipt.doctor_id, "doc1");
        assert_eq!(receipt.datetime, at(2024, 5, 8, 14, 0));
        assert_eq!(receipt.status, BookingStatus::Requested);

        let rejected = session.book(&RejectingHandler).await;
        assert_matches!(rejected, Err(AppointmentError::Booking(BookingError::Rejected(_))));
    }
}
