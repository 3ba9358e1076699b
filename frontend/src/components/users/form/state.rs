use common::forms::user::UserForm;
use common::forms::{FormMode, FormPhase};
use common::model::reference::{Status, UserProfile};

pub struct UserFormScreen {
    pub form: UserForm,
    pub mode: FormMode,
    pub phase: FormPhase,
    pub statuses: Vec<Status>,
    pub profiles: Vec<UserProfile>,
    pub pending: u8,
}

impl UserFormScreen {
    pub fn new(mode: FormMode) -> Self {
        Self {
            form: UserForm::default(),
            mode,
            phase: FormPhase::Idle,
            statuses: Vec::new(),
            profiles: Vec::new(),
            pending: 0,
        }
    }

    pub fn settle(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        if self.pending == 0 && self.phase == FormPhase::Loading {
            self.phase = FormPhase::Ready;
        }
    }
}
