//! Implements InputPort. Inquire-based interactive menus.
//!
//! Browse / ask / register / submit. The assistant transcript lives here,
//! in the UI; the answer service itself keeps no conversation state.

use crate::adapters::ui::calendar::{display_date, google_calendar_link};
use crate::adapters::ui::progress::with_spinner;
use crate::domain::{
    Category, CollegeYear, DomainError, Event, EventForm, EventQuery, RegistrationForm,
    ValidationErrors,
};
use crate::ports::InputPort;
use crate::usecases::{
    AnswerService, AuthService, CatalogService, OrganizerSession, RegistrationService,
    SubmissionService,
};
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{Confirm, InquireError, Password, Select, Text};
use std::fmt;
use std::sync::{Arc, Mutex};

const MENU_BROWSE: &str = "Browse upcoming events";
const MENU_ASK: &str = "Ask the AI assistant";
const MENU_REGISTER: &str = "Register for an event";
const MENU_SUBMIT: &str = "Submit an event (organizers)";
const MENU_LOGOUT: &str = "Log out";
const MENU_QUIT: &str = "Quit";

const ALL_CATEGORIES: &str = "All";
const OPENING_QUESTION: &str = "What's happening this week?";
const ASSISTANT_APOLOGY: &str = "Sorry, I had trouble finding an answer. Please try again.";

/// Applies the prompt theme globally.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("?").with_fg(Color::LightMagenta))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(Color::LightYellow))
        .with_answer(StyleSheet::new().with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

/// `Ok(None)` when the user backs out (Esc / Ctrl-C), error otherwise.
fn optional<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Input(e.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Speaker {
    User,
    Bot,
}

fn print_line(speaker: Speaker, text: &str) {
    match speaker {
        Speaker::User => println!("{} {}", "you >".cyan().bold(), text),
        Speaker::Bot => println!("{} {}", "bot >".magenta().bold(), text),
    }
}

fn print_card(event: &Event) {
    println!();
    println!(
        "{}  [{}]",
        event.title.as_str().bold(),
        event.category.as_str().yellow()
    );
    println!("  {}", event.description);
    println!("  Date:     {}", display_date(event.date));
    println!("  Time:     {}", event.time);
    println!("  Location: {}", event.location);
    if let Some(link) = google_calendar_link(event) {
        println!("  Calendar: {}", link.as_str().dark_grey());
    }
}

fn print_validation(errors: &ValidationErrors) {
    for e in errors.fields() {
        println!("  {} {}", format!("{}:", e.field).red(), e.message);
    }
}

/// Select entry carrying the event itself, so identical labels stay distinct.
struct EventChoice<'a>(&'a Event);

impl fmt::Display for EventChoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = self.0;
        write!(f, "{} - {} {}", event.title, event.date, event.time)
    }
}

/// Cursor for the year select: the previous answer, else the first entry.
fn year_cursor(prev: &RegistrationForm) -> usize {
    CollegeYear::ALL
        .iter()
        .position(|y| y.as_str() == prev.college_year)
        .unwrap_or(0)
}

/// Cursor for the semester select ("1".."8" at 0..7).
fn semester_cursor(prev: &RegistrationForm) -> usize {
    match prev.semester.trim().parse::<usize>() {
        Ok(n @ 1..=8) => n - 1,
        _ => 0,
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    catalog: Arc<CatalogService>,
    answers: Arc<AnswerService>,
    registrations: Arc<RegistrationService>,
    submissions: Arc<SubmissionService>,
    auth: Arc<AuthService>,
    session: Mutex<Option<OrganizerSession>>,
    transcript: Mutex<Vec<(Speaker, String)>>,
}

impl TuiInputPort {
    pub fn new(
        catalog: Arc<CatalogService>,
        answers: Arc<AnswerService>,
        registrations: Arc<RegistrationService>,
        submissions: Arc<SubmissionService>,
        auth: Arc<AuthService>,
    ) -> Self {
        Self {
            catalog,
            answers,
            registrations,
            submissions,
            auth,
            session: Mutex::new(None),
            transcript: Mutex::new(Vec::new()),
        }
    }

    fn current_session(&self) -> Option<OrganizerSession> {
        self.session.lock().ok().and_then(|s| s.clone())
    }

    fn set_session(&self, session: Option<OrganizerSession>) {
        if let Ok(mut guard) = self.session.lock() {
            *guard = session;
        }
    }

    fn push_transcript(&self, speaker: Speaker, text: String) {
        print_line(speaker, &text);
        if let Ok(mut t) = self.transcript.lock() {
            t.push((speaker, text));
        }
    }

    async fn browse(&self) -> Result<(), DomainError> {
        let Some(search) = optional(
            Text::new("Search events by keyword:")
                .with_help_message("Leave empty to show everything")
                .prompt(),
        )?
        else {
            return Ok(());
        };
        let mut options = vec![ALL_CATEGORIES];
        options.extend(Category::ALL.iter().map(|c| c.as_str()));
        let Some(picked) = optional(Select::new("Filter by category:", options).prompt())? else {
            return Ok(());
        };

        let query = EventQuery {
            search,
            category: Category::from_label(picked),
        };
        let events = with_spinner("Loading events...", self.catalog.list_upcoming(&query)).await?;

        if events.is_empty() {
            println!("\n{}", "No Events Found".bold());
            println!("Try adjusting your search or filters.\n");
            return Ok(());
        }
        for event in &events {
            print_card(event);
        }
        println!();

        if optional(Confirm::new("Register for one of these?").with_default(false).prompt())?
            .unwrap_or(false)
        {
            self.register_from(events).await?;
        }
        Ok(())
    }

    async fn ask(&self) -> Result<(), DomainError> {
        let history: Vec<(Speaker, String)> = self
            .transcript
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default();
        println!("\n{}", "AI Event Assistant".bold());
        println!("Ask me anything about campus tech events! (empty line to go back)\n");
        for (speaker, text) in &history {
            print_line(*speaker, text);
        }

        if history.is_empty() {
            self.exchange(OPENING_QUESTION.to_string()).await;
        }

        loop {
            let Some(question) = optional(Text::new("Ask a question...").prompt())? else {
                return Ok(());
            };
            if question.trim().is_empty() {
                return Ok(());
            }
            self.exchange(question).await;
        }
    }

    /// One question/answer turn. Failures show a generic apology, never the raw error.
    async fn exchange(&self, question: String) {
        self.push_transcript(Speaker::User, question.clone());
        let reply = match with_spinner("Thinking...", self.answers.answer(&question)).await {
            Ok(answer) => answer.answer,
            Err(e) => {
                tracing::error!(error = %e, "assistant failed to answer");
                ASSISTANT_APOLOGY.to_string()
            }
        };
        self.push_transcript(Speaker::Bot, reply);
    }

    async fn register(&self) -> Result<(), DomainError> {
        let events = with_spinner(
            "Loading events...",
            self.catalog.list_upcoming(&EventQuery::default()),
        )
        .await?;
        if events.is_empty() {
            println!("There are no upcoming events to register for.");
            return Ok(());
        }
        self.register_from(events).await
    }

    async fn register_from(&self, events: Vec<Event>) -> Result<(), DomainError> {
        let choices: Vec<EventChoice<'_>> = events.iter().map(EventChoice).collect();
        let Some(EventChoice(event)) = optional(Select::new("Which event?", choices).prompt())?
        else {
            return Ok(());
        };

        println!("\n{}", "Register for Event".bold());
        println!("Fill out your details to reserve your spot.\n");

        let mut form = RegistrationForm::default();
        loop {
            let Some(filled) = prompt_registration(&form)? else {
                return Ok(());
            };
            form = filled;
            match self.registrations.register(&event.id, &form).await {
                Ok(_) => {
                    println!("{}", "Registration Successful!".green().bold());
                    println!("You have been registered for the event. See you there!\n");
                    return Ok(());
                }
                Err(DomainError::Validation(errors)) => {
                    print_validation(&errors);
                    if !optional(Confirm::new("Fix and try again?").with_default(true).prompt())?
                        .unwrap_or(false)
                    {
                        return Ok(());
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, event_id = %event.id, "registration failed");
                    println!("{}", "Registration Failed".red().bold());
                    println!("There was an error processing your registration. Please try again.\n");
                    return Ok(());
                }
            }
        }
    }

    async fn login(&self) -> Result<Option<OrganizerSession>, DomainError> {
        if let Some(session) = self.current_session() {
            return Ok(Some(session));
        }
        println!("\n{}", "Organizer Login".bold());
        let Some(email) = optional(Text::new("Email:").prompt())? else {
            return Ok(None);
        };
        let Some(password) = optional(
            Password::new("Password:")
                .without_confirmation()
                .prompt(),
        )?
        else {
            return Ok(None);
        };
        match self.auth.login(&email, &password).await {
            Ok(session) => {
                println!("Logged in as {}.\n", session.email());
                self.set_session(Some(session.clone()));
                Ok(Some(session))
            }
            Err(DomainError::Auth(_)) => {
                println!("{}", "Login failed: invalid email or password.".red());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn submit(&self) -> Result<(), DomainError> {
        let Some(session) = self.login().await? else {
            return Ok(());
        };

        println!("\n{}", "Submit a New Event".bold());
        println!("Fill out the form below to add a new tech event to our listings.\n");

        let mut form = EventForm::default();
        loop {
            let Some(filled) = prompt_event(&form)? else {
                return Ok(());
            };
            form = filled;
            match self.submissions.submit(&session, &form).await {
                Ok(event) => {
                    println!("{}", "Event Submitted!".green().bold());
                    println!("{} has been added to the event listings.\n", event.title);
                    return Ok(());
                }
                Err(DomainError::Validation(errors)) => {
                    print_validation(&errors);
                    if !optional(Confirm::new("Fix and try again?").with_default(true).prompt())?
                        .unwrap_or(false)
                    {
                        return Ok(());
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "event submission failed");
                    println!("{}", "Submission Failed".red().bold());
                    println!("There was an error submitting the event. Please try again.\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Prompt every registration field, pre-filled from `prev`. `None` if cancelled.
fn prompt_registration(prev: &RegistrationForm) -> Result<Option<RegistrationForm>, DomainError> {
    let Some(name) = optional(Text::new("Full Name:").with_initial_value(&prev.name).prompt())?
    else {
        return Ok(None);
    };
    let years: Vec<&str> = CollegeYear::ALL.iter().map(|y| y.as_str()).collect();
    let Some(year) = optional(
        Select::new("Year:", years)
            .with_starting_cursor(year_cursor(prev))
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    let semesters: Vec<String> = (1..=8).map(|s: u8| s.to_string()).collect();
    let Some(semester) = optional(
        Select::new("Semester:", semesters)
            .with_starting_cursor(semester_cursor(prev))
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    let Some(email) = optional(
        Text::new("College Email (.edu.in):")
            .with_initial_value(&prev.email)
            .with_placeholder("yourname@college.edu.in")
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    let Some(mobile) = optional(
        Text::new("Mobile Number:")
            .with_initial_value(&prev.mobile)
            .with_placeholder("1234567890")
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    Ok(Some(RegistrationForm {
        name,
        college_year: year.to_string(),
        semester,
        email,
        mobile,
    }))
}

/// Prompt every event field, pre-filled from `prev`. `None` if cancelled.
fn prompt_event(prev: &EventForm) -> Result<Option<EventForm>, DomainError> {
    let Some(title) = optional(
        Text::new("Event Title:")
            .with_initial_value(&prev.title)
            .with_placeholder("e.g., Intro to React")
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    let Some(description) = optional(
        Text::new("Description:")
            .with_initial_value(&prev.description)
            .with_placeholder("Tell us more about the event")
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    let Some(location) = optional(
        Text::new("Location:")
            .with_initial_value(&prev.location)
            .with_placeholder("e.g., Main Auditorium")
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    let Some(category) = optional(Select::new("Category:", categories).prompt())? else {
        return Ok(None);
    };
    let Some(date) = optional(
        Text::new("Date (YYYY-MM-DD):")
            .with_initial_value(&prev.date)
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    let Some(time) = optional(
        Text::new("Time (24h format):")
            .with_initial_value(&prev.time)
            .with_placeholder("e.g., 14:30")
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    Ok(Some(EventForm {
        title,
        description,
        location,
        date,
        time,
        category: category.to_string(),
    }))
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let mut options = vec![MENU_BROWSE, MENU_ASK, MENU_REGISTER, MENU_SUBMIT];
            if self.current_session().is_some() {
                options.push(MENU_LOGOUT);
            }
            options.push(MENU_QUIT);

            let Some(choice) =
                optional(Select::new("What would you like to do?", options).prompt())?
            else {
                return Ok(());
            };
            match choice {
                MENU_BROWSE => self.browse().await?,
                MENU_ASK => self.ask().await?,
                MENU_REGISTER => self.register().await?,
                MENU_SUBMIT => self.submit().await?,
                MENU_LOGOUT => {
                    self.set_session(None);
                    println!("You have been successfully logged out.\n");
                }
                _ => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::event;

    #[test]
    fn test_optional_maps_cancel_to_none() {
        assert_eq!(optional(Ok::<_, InquireError>(3)).unwrap(), Some(3));
        assert!(
            optional::<u8>(Err(InquireError::OperationCanceled))
                .unwrap()
                .is_none()
        );
        assert!(matches!(
            optional::<u8>(Err(InquireError::NotTTY)),
            Err(DomainError::Input(_))
        ));
    }

    #[test]
    fn test_event_choice_label() {
        let e = event("a", "2024-01-10");
        assert_eq!(EventChoice(&e).to_string(), "Event a - 2024-01-10 10:00");
    }

    #[test]
    fn test_identical_labels_keep_their_own_event() {
        let first = event("doc-1", "2024-01-10");
        let mut second = first.clone();
        second.id = "doc-2".to_string();
        let events = [first, second];

        let choices: Vec<EventChoice<'_>> = events.iter().map(EventChoice).collect();

        assert_eq!(choices[0].to_string(), choices[1].to_string());
        assert_eq!(choices[0].0.id, "doc-1");
        assert_eq!(choices[1].0.id, "doc-2");
    }

    #[test]
    fn test_selects_start_at_previous_answers() {
        let blank = RegistrationForm::default();
        assert_eq!(year_cursor(&blank), 0);
        assert_eq!(semester_cursor(&blank), 0);

        let prev = RegistrationForm {
            college_year: "Third Year".to_string(),
            semester: "6".to_string(),
            ..RegistrationForm::default()
        };
        assert_eq!(year_cursor(&prev), 2);
        assert_eq!(semester_cursor(&prev), 5);

        let odd = RegistrationForm {
            semester: "9".to_string(),
            ..RegistrationForm::default()
        };
        assert_eq!(semester_cursor(&odd), 0);
    }
}
