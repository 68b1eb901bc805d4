//! Opening a client's detail session.

use std::sync::Arc;

use tracing::{debug, warn};

use rd_core::client::RosterStore;
use rd_core::ids::ClientId;
use rd_core::ports::{ApiError, ClientApiPort, ConfirmationPort, NotifierPort};
use rd_core::session::DetailSession;

use crate::state::SharedViewState;
use crate::usecases::confirm_close::ConfirmCloseUseCase;

pub(crate) const FETCH_ERROR_NOTICE: &str = "Error fetching client data. Please try again.";

/// What a selection attempt amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The session switched to the requested client.
    Selected,
    /// The unsaved-changes guard was declined; nothing changed.
    KeptCurrent,
    /// The id is not in the roster; nothing changed.
    UnknownClient,
    /// A newer selection landed while this fetch was in flight.
    Superseded,
}

/// Switches the detail session to a roster client and fans out the detail
/// fetches.
pub struct SelectClientUseCase {
    api: Arc<dyn ClientApiPort>,
    confirmation: Arc<dyn ConfirmationPort>,
    notifier: Arc<dyn NotifierPort>,
    roster: Arc<RosterStore>,
    state: SharedViewState,
}

impl SelectClientUseCase {
    pub fn new(
        api: Arc<dyn ClientApiPort>,
        confirmation: Arc<dyn ConfirmationPort>,
        notifier: Arc<dyn NotifierPort>,
        roster: Arc<RosterStore>,
        state: SharedViewState,
    ) -> Self {
        Self {
            api,
            confirmation,
            notifier,
            roster,
            state,
        }
    }

    #[tracing::instrument(
        name = "usecase.select_client.execute",
        skip(self),
        fields(client = %client_id)
    )]
    pub async fn execute(&self, client_id: &ClientId) -> SelectOutcome {
        // 1. Staged work guards a switch exactly like it guards closing.
        let guard = ConfirmCloseUseCase::new(self.confirmation.clone(), self.state.clone());
        if !guard.execute().await {
            debug!("selection cancelled by the unsaved-changes guard");
            return SelectOutcome::KeptCurrent;
        }

        let Some(client) = self.roster.get(client_id) else {
            warn!("selection target is not in the roster");
            return SelectOutcome::UnknownClient;
        };

        // 2. Enter Loading under a fresh epoch. The lock is released before
        //    the fetches start.
        let epoch = {
            let mut state = self.state.write().unwrap();
            let epoch = state.next_epoch();
            state.session = DetailSession::begin(client, epoch);
            epoch
        };

        // 3. Both detail fetches run concurrently.
        let (documents, payment) = tokio::join!(
            self.api.list_documents(client_id),
            self.api.fetch_payment_details(client_id),
        );

        // Missing payment details are a normal absence. Anything else
        // degrades to an empty detail view plus a single notice.
        let (documents, payment, fetch_failed) = match (documents, payment) {
            (Ok(documents), Ok(payment)) => (documents, Some(payment), false),
            (Ok(documents), Err(ApiError::NotFound)) => (documents, None, false),
            (documents, payment) => {
                if let Err(error) = &documents {
                    warn!(%error, "document list fetch failed");
                }
                if let Err(error) = &payment {
                    if !matches!(error, ApiError::NotFound) {
                        warn!(%error, "payment details fetch failed");
                    }
                }
                (Vec::new(), None, true)
            }
        };

        // 4. Apply under the epoch check; stale completions vanish silently.
        let applied = self
            .state
            .write()
            .unwrap()
            .session
            .complete_fetch(epoch, documents, payment);
        if !applied {
            debug!(epoch, "fetch completion superseded");
            return SelectOutcome::Superseded;
        }
        if fetch_failed {
            self.notifier.error(FETCH_ERROR_NOTICE);
        }
        SelectOutcome::Selected
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::usecases::testing::{
        client, document, fresh_state, payment_details, seeded_roster, select_directly, staged,
        RecordingApi, RecordingNotifier, StubConfirmation,
    };

    struct TestBed {
        api: Arc<RecordingApi>,
        confirmation: Arc<StubConfirmation>,
        notifier: Arc<RecordingNotifier>,
        roster: Arc<RosterStore>,
        state: SharedViewState,
    }

    impl TestBed {
        fn new(confirmation: StubConfirmation) -> Self {
            Self {
                api: Arc::new(RecordingApi::default()),
                confirmation: Arc::new(confirmation),
                notifier: Arc::new(RecordingNotifier::default()),
                roster: seeded_roster(),
                state: fresh_state(),
            }
        }

        fn usecase(&self) -> SelectClientUseCase {
            SelectClientUseCase::new(
                self.api.clone(),
                self.confirmation.clone(),
                self.notifier.clone(),
                self.roster.clone(),
                self.state.clone(),
            )
        }
    }

    #[tokio::test]
    async fn test_select_populates_documents_and_payment_details() {
        let bed = TestBed::new(StubConfirmation::accepting());
        *bed.api.documents_result.lock().unwrap() =
            Ok(vec![document("d1", "c1", "contract.pdf")]);
        *bed.api.payment_result.lock().unwrap() = Ok(payment_details());

        let outcome = bed.usecase().execute(&ClientId::from("c1")).await;

        assert_eq!(outcome, SelectOutcome::Selected);
        let guard = bed.state.read().unwrap();
        assert_eq!(guard.session.client().unwrap().id, ClientId::from("c1"));
        assert_eq!(guard.session.documents().unwrap().len(), 1);
        assert!(guard.session.payment_details().is_some());
        assert_eq!(guard.session.epoch(), Some(1));
        assert_eq!(bed.notifier.error_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_payment_details_is_a_plain_absence() {
        let bed = TestBed::new(StubConfirmation::accepting());
        *bed.api.documents_result.lock().unwrap() =
            Ok(vec![document("d1", "c1", "contract.pdf")]);
        // payment_result defaults to Err(NotFound)

        let outcome = bed.usecase().execute(&ClientId::from("c1")).await;

        assert_eq!(outcome, SelectOutcome::Selected);
        let guard = bed.state.read().unwrap();
        assert_eq!(guard.session.documents().unwrap().len(), 1);
        assert!(guard.session.payment_details().is_none());
        assert_eq!(bed.notifier.error_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_selection_with_one_notice() {
        let bed = TestBed::new(StubConfirmation::accepting());
        *bed.api.documents_result.lock().unwrap() =
            Err(ApiError::Network("connection reset".to_string()));

        let outcome = bed.usecase().execute(&ClientId::from("c1")).await;

        assert_eq!(outcome, SelectOutcome::Selected);
        let guard = bed.state.read().unwrap();
        assert!(guard.session.is_active());
        assert!(guard.session.documents().unwrap().is_empty());
        assert_eq!(
            bed.notifier.errors.lock().unwrap().as_slice(),
            [FETCH_ERROR_NOTICE]
        );
    }

    #[tokio::test]
    async fn test_unknown_client_changes_nothing() {
        let bed = TestBed::new(StubConfirmation::accepting());

        let outcome = bed.usecase().execute(&ClientId::from("ghost")).await;

        assert_eq!(outcome, SelectOutcome::UnknownClient);
        assert!(!bed.state.read().unwrap().session.is_active());
        assert!(bed.api.list_documents_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_declined_guard_keeps_the_current_session() {
        let bed = TestBed::new(StubConfirmation::declining());
        select_directly(&bed.state, client("c1", "Alice Archer", "Harbor Bridge"));
        bed.state
            .write()
            .unwrap()
            .session
            .stager_mut()
            .unwrap()
            .stage(staged("draft.pdf"));

        let outcome = bed.usecase().execute(&ClientId::from("c2")).await;

        assert_eq!(outcome, SelectOutcome::KeptCurrent);
        let guard = bed.state.read().unwrap();
        assert_eq!(guard.session.client().unwrap().id, ClientId::from("c1"));
        assert_eq!(guard.session.stager().unwrap().len(), 1);
        assert!(bed.api.list_documents_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_accepted_guard_switches_and_resets_the_stage() {
        let bed = TestBed::new(StubConfirmation::accepting());
        select_directly(&bed.state, client("c1", "Alice Archer", "Harbor Bridge"));
        bed.state
            .write()
            .unwrap()
            .session
            .stager_mut()
            .unwrap()
            .stage(staged("draft.pdf"));

        let outcome = bed.usecase().execute(&ClientId::from("c2")).await;

        assert_eq!(outcome, SelectOutcome::Selected);
        let guard = bed.state.read().unwrap();
        assert_eq!(guard.session.client().unwrap().id, ClientId::from("c2"));
        assert!(guard.session.stager().unwrap().is_empty());
        assert!(!guard.session.is_dirty());
        assert_eq!(bed.confirmation.prompt_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_switch_keeps_only_the_newest_selection() {
        let bed = TestBed::new(StubConfirmation::accepting());
        bed.api
            .fetch_delays
            .lock()
            .unwrap()
            .insert(ClientId::from("c1"), Duration::from_millis(100));
        bed.api
            .fetch_delays
            .lock()
            .unwrap()
            .insert(ClientId::from("c2"), Duration::from_millis(10));

        let usecase = Arc::new(bed.usecase());
        let slow = {
            let usecase = usecase.clone();
            tokio::spawn(async move { usecase.execute(&ClientId::from("c1")).await })
        };
        // Let the first selection reach its fetches before issuing the second.
        tokio::time::sleep(Duration::from_millis(1)).await;

        let fast = usecase.execute(&ClientId::from("c2")).await;
        let slow = slow.await.unwrap();

        assert_eq!(fast, SelectOutcome::Selected);
        assert_eq!(slow, SelectOutcome::Superseded);
        let guard = bed.state.read().unwrap();
        assert_eq!(guard.session.client().unwrap().id, ClientId::from("c2"));
        assert_eq!(guard.session.epoch(), Some(2));
        assert_eq!(bed.notifier.error_count(), 0);
    }
}
