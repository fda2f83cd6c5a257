//! Wizard navigation
//!
//! A linear step counter over the menu state. Forward moves are gated on the
//! current step being complete; nothing here talks to the server.

use std::fmt;

use shared::models::MenuState;
use thiserror::Error;

use crate::preview::MenuPreview;

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    RestaurantDetails,
    Categories,
    MealGroups,
    Meals,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::RestaurantDetails,
        Step::Categories,
        Step::MealGroups,
        Step::Meals,
    ];

    /// 1-based position
    pub fn number(self) -> u8 {
        match self {
            Step::RestaurantDetails => 1,
            Step::Categories => 2,
            Step::MealGroups => 3,
            Step::Meals => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Step> {
        Step::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Step::RestaurantDetails => "Restaurant Details",
            Step::Categories => "Categories",
            Step::MealGroups => "Meal Groups",
            Step::Meals => "Meals",
        }
    }

    pub fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn prev(self) -> Option<Step> {
        Step::from_number(self.number() - 1)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Whether this step's part of the menu is filled in
    pub fn is_complete(self, state: &MenuState) -> bool {
        match self {
            Step::RestaurantDetails => state.restaurant_details.is_some(),
            Step::Categories => !state.categories.is_empty(),
            Step::MealGroups => !state.meal_groups.is_empty(),
            Step::Meals => !state.meals.is_empty(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Step {0} is not complete yet")]
    StepIncomplete(Step),

    #[error("Already at the first step")]
    AtFirstStep,

    #[error("Already at the last step")]
    AtLastStep,
}

/// Current position in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wizard {
    step: Step,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at a given step, e.g. after a restore
    pub fn at(step: Step) -> Self {
        Self { step }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Completion percentage shown on the progress bar
    pub fn progress(&self) -> u8 {
        let percent = u16::from(self.step.number()) * 100 / Step::ALL.len() as u16;
        percent as u8
    }

    /// Whether the "Next" (or, on the last step, "Preview") control is enabled
    pub fn can_proceed(&self, state: &MenuState) -> bool {
        self.step.is_complete(state)
    }

    pub fn next(&mut self, state: &MenuState) -> Result<Step, WizardError> {
        let next = self.step.next().ok_or(WizardError::AtLastStep)?;
        if !self.can_proceed(state) {
            return Err(WizardError::StepIncomplete(self.step));
        }
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Result<Step, WizardError> {
        let prev = self.step.prev().ok_or(WizardError::AtFirstStep)?;
        self.step = prev;
        Ok(prev)
    }

    /// Preview of the finished menu, available on the last step once it is complete
    pub fn preview(&self, state: &MenuState) -> Result<MenuPreview, WizardError> {
        if !self.step.is_last() {
            return Err(WizardError::StepIncomplete(self.step));
        }
        if !self.can_proceed(state) {
            return Err(WizardError::StepIncomplete(self.step));
        }
        Ok(MenuPreview::build(state))
    }

    /// First step whose part of the menu is still missing, or the last step
    pub fn resume_point(state: &MenuState) -> Step {
        Step::ALL
            .into_iter()
            .find(|step| !step.is_complete(state))
            .unwrap_or(Step::Meals)
    }
}
