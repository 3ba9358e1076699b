use chrono::Utc;
use common::forms::FormPhase;
use common::forms::survey::SurveyForm;
use common::model::reference::{EducationTier, Gender, IncomeTier};

pub struct SurveyScreen {
    pub form: SurveyForm,
    pub phase: FormPhase,
    pub genders: Vec<Gender>,
    pub education_tiers: Vec<EducationTier>,
    pub income_tiers: Vec<IncomeTier>,
    /// The scoped candidate lookup for the current place is in flight.
    pub looking_up: bool,
}

impl SurveyScreen {
    pub fn new() -> Self {
        Self {
            form: SurveyForm::new(Utc::now()),
            phase: FormPhase::Idle,
            genders: Vec::new(),
            education_tiers: Vec::new(),
            income_tiers: Vec::new(),
            looking_up: false,
        }
    }
}
