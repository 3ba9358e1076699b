use common::forms::candidate::CandidateForm;
use common::forms::{FormMode, FormPhase};
use common::model::reference::{Office, Party, Status};

pub struct CandidateFormScreen {
    pub form: CandidateForm,
    pub mode: FormMode,
    pub phase: FormPhase,
    pub statuses: Vec<Status>,
    pub parties: Vec<Party>,
    pub offices: Vec<Office>,
    /// Mount fetches still outstanding (reference lists, record).
    pub pending: u8,
}

impl CandidateFormScreen {
    pub fn new(mode: FormMode) -> Self {
        Self {
            form: CandidateForm::default(),
            mode,
            phase: FormPhase::Idle,
            statuses: Vec::new(),
            parties: Vec::new(),
            offices: Vec::new(),
            pending: 0,
        }
    }

    /// One mount fetch has resolved.
    pub fn settle(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        if self.pending == 0 && self.phase == FormPhase::Loading {
            self.phase = FormPhase::Ready;
        }
    }

    /// `cadastrar` or `atualizar`, for user-facing messages.
    pub fn verb(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "cadastrar",
            FormMode::Edit(_) => "atualizar",
        }
    }
}
