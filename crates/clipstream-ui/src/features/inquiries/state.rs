//! Support inquiry feature state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Convert to shared API types only on submit.
//! - List rows are shared via `Rc` so selector clones stay cheap.

use crate::features::inquiries::logic::{parse_content, parse_title};
use clipstream_api_models::{
    Inquiry, InquiryCreateRequest, InquiryListResponse, InquiryUpdateRequest,
};
use std::rc::Rc;

/// Mutable inquiry editor state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct InquiryFormState {
    /// Subject line entered in the editor.
    pub title: String,
    /// Body text entered in the editor.
    pub content: String,
}

impl InquiryFormState {
    /// Build form state from an existing inquiry.
    #[must_use]
    pub fn from_entry(entry: &Inquiry) -> Self {
        Self {
            title: entry.title.clone(),
            content: entry.content.clone(),
        }
    }

    /// Convert the form into a create payload.
    ///
    /// # Errors
    /// Returns an error when the title or content is blank or too long.
    pub fn to_create_request(&self) -> Result<InquiryCreateRequest, String> {
        Ok(InquiryCreateRequest {
            title: parse_title(&self.title)?,
            content: parse_content(&self.content)?,
        })
    }

    /// Convert the form into an update payload.
    ///
    /// # Errors
    /// Returns an error when the title or content is blank or too long.
    pub fn to_update_request(&self) -> Result<InquiryUpdateRequest, String> {
        Ok(InquiryUpdateRequest {
            title: parse_title(&self.title)?,
            content: parse_content(&self.content)?,
        })
    }
}

/// Inquiry list/detail slice stored in the app state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct InquiriesState {
    /// Page of inquiries in listing order.
    pub items: Vec<Rc<Inquiry>>,
    /// One-based page index of the shown page.
    pub page: u32,
    /// Total pages reported by the API.
    pub total_pages: u32,
    /// Total inquiries for the account.
    pub total: u64,
    /// Inquiry opened in the detail view, when any.
    pub selected: Option<Rc<Inquiry>>,
    /// Whether a list fetch is outstanding.
    pub loading: bool,
}

/// Mark the list as fetching.
pub const fn begin_list_load(state: &mut InquiriesState) {
    state.loading = true;
}

/// Replace the listing page with a fetched response.
pub fn set_page(state: &mut InquiriesState, response: InquiryListResponse) {
    state.items = response.inquiries.into_iter().map(Rc::new).collect();
    state.page = response.page;
    state.total_pages = response.total_pages;
    state.total = response.total;
    state.loading = false;
}

/// Insert or replace an inquiry after a create/update call.
pub fn upsert(state: &mut InquiriesState, inquiry: Inquiry) {
    let entry = Rc::new(inquiry);
    if state.selected.as_ref().is_some_and(|sel| sel.id == entry.id) {
        state.selected = Some(Rc::clone(&entry));
    }
    if let Some(row) = state.items.iter_mut().find(|row| row.id == entry.id) {
        *row = entry;
    } else {
        state.items.insert(0, entry);
        state.total = state.total.saturating_add(1);
    }
}

/// Open an inquiry in the detail view.
pub fn set_selected(state: &mut InquiriesState, inquiry: Inquiry) {
    state.selected = Some(Rc::new(inquiry));
}

/// Close the detail view.
pub fn clear_selected(state: &mut InquiriesState) {
    state.selected = None;
}

/// Remove an inquiry after a delete call.
pub fn remove(state: &mut InquiriesState, id: u64) {
    let before = state.items.len();
    state.items.retain(|row| row.id != id);
    if state.items.len() < before {
        state.total = state.total.saturating_sub(1);
    }
    if state.selected.as_ref().is_some_and(|sel| sel.id == id) {
        state.selected = None;
    }
}

/// Drop the staff answer after a delete-answer call.
pub fn clear_answer(state: &mut InquiriesState, id: u64) {
    let strip = |inquiry: &Inquiry| {
        let mut next = inquiry.clone();
        next.answer = None;
        next.is_answered = false;
        next.answered_at = None;
        next
    };
    if let Some(row) = state.items.iter_mut().find(|row| row.id == id) {
        *row = Rc::new(strip(row));
    }
    if let Some(selected) = state.selected.take() {
        state.selected = Some(if selected.id == id {
            Rc::new(strip(&selected))
        } else {
            selected
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{
        InquiriesState, InquiryFormState, clear_answer, remove, set_page, set_selected, upsert,
    };
    use chrono::{TimeZone, Utc};
    use clipstream_api_models::{Inquiry, InquiryListResponse, UserProfile};

    fn author() -> UserProfile {
        UserProfile {
            id: 5,
            nickname: "viewer5".to_string(),
            email: "viewer5@example.com".to_string(),
            profile_image: None,
        }
    }

    fn inquiry(id: u64, title: &str) -> Inquiry {
        Inquiry {
            id,
            title: title.to_string(),
            content: "body".to_string(),
            answer: None,
            is_answered: false,
            answered_at: None,
            created_at: Utc.timestamp_millis_opt(0).unwrap(),
            author: author(),
        }
    }

    fn answered(id: u64) -> Inquiry {
        Inquiry {
            answer: Some("done".to_string()),
            is_answered: true,
            answered_at: Some(Utc.timestamp_millis_opt(1_000).unwrap()),
            ..inquiry(id, "answered")
        }
    }

    #[test]
    fn form_round_trips_an_entry() {
        let entry = inquiry(11, "Playback stutters");
        let form = InquiryFormState::from_entry(&entry);
        let request = form.to_create_request().expect("request should parse");
        assert_eq!(request.title, "Playback stutters");
        assert_eq!(request.content, "body");
    }

    #[test]
    fn blank_form_is_rejected() {
        let form = InquiryFormState::default();
        assert!(form.to_create_request().is_err());
        assert!(form.to_update_request().is_err());
    }

    #[test]
    fn set_page_replaces_rows() {
        let mut state = InquiriesState {
            loading: true,
            ..InquiriesState::default()
        };
        set_page(
            &mut state,
            InquiryListResponse {
                inquiries: vec![inquiry(1, "a"), inquiry(2, "b")],
                total: 2,
                page: 1,
                total_pages: 1,
            },
        );
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.total, 2);
        assert!(!state.loading);
    }

    #[test]
    fn upsert_prepends_new_and_replaces_existing() {
        let mut state = InquiriesState::default();
        upsert(&mut state, inquiry(1, "first"));
        upsert(&mut state, inquiry(2, "second"));
        assert_eq!(state.items[0].id, 2);
        assert_eq!(state.total, 2);
        upsert(&mut state, inquiry(1, "first, edited"));
        assert_eq!(state.total, 2);
        let edited = state.items.iter().find(|row| row.id == 1).expect("row 1");
        assert_eq!(edited.title, "first, edited");
    }

    #[test]
    fn upsert_refreshes_the_open_detail() {
        let mut state = InquiriesState::default();
        set_selected(&mut state, inquiry(1, "first"));
        upsert(&mut state, inquiry(1, "first, edited"));
        assert_eq!(
            state.selected.as_ref().map(|sel| sel.title.clone()),
            Some("first, edited".to_string())
        );
    }

    #[test]
    fn remove_drops_row_and_selection() {
        let mut state = InquiriesState::default();
        upsert(&mut state, inquiry(1, "first"));
        set_selected(&mut state, inquiry(1, "first"));
        remove(&mut state, 1);
        assert!(state.items.is_empty());
        assert!(state.selected.is_none());
        assert_eq!(state.total, 0);
    }

    #[test]
    fn clear_answer_strips_all_answer_fields() {
        let mut state = InquiriesState::default();
        upsert(&mut state, answered(3));
        set_selected(&mut state, answered(3));
        clear_answer(&mut state, 3);
        let row = state.items.first().expect("row");
        assert!(row.answer.is_none());
        assert!(!row.is_answered);
        assert!(row.answered_at.is_none());
        let selected = state.selected.as_ref().expect("selection");
        assert!(selected.answer.is_none());
    }
}
