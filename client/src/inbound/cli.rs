//! Command-line adapter over the session controller, mock backend, and drafts.
//!
//! Every command writes one pretty-printed JSON document to the supplied
//! writer so output can be piped into other tools. Service calls run under a
//! [`LifetimeHandle`]; once its owner closes, a pending call is abandoned and
//! nothing is written.

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use mockable::Clock;
use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::domain::drafts::{
    BillPaymentForm, DraftForm, FormDraftStore, FormName, GiftCardForm, HotelBookingForm,
    TransferForm, clear_all_drafts,
};
use crate::domain::ports::{AccountQuery, KeyValueStore, ReferenceDataQuery};
use crate::domain::{
    DomainError, LifetimeHandle, LoginCredentials, RequestState, SessionController, SessionState,
    SignupRequest,
};
use crate::outbound::mock_backend::MockBackend;

/// `client` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "client",
    about = "Drive the wallet client core against the fixture backend",
    version
)]
pub struct Cli {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level operations.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sign in and cache the session token.
    Login {
        /// Account email.
        #[arg(long)]
        email: String,
        /// Account password.
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in.
    Signup {
        /// Given name.
        #[arg(long)]
        first_name: Option<String>,
        /// Family name.
        #[arg(long)]
        last_name: Option<String>,
        /// Contact email.
        #[arg(long)]
        email: Option<String>,
        /// Contact phone number.
        #[arg(long)]
        phone: Option<String>,
        /// Chosen password.
        #[arg(long)]
        password: String,
    },
    /// Show the signed-in user.
    Whoami,
    /// Sign out and delete every draft.
    Logout,
    /// Request a password reset email.
    ForgotPassword {
        /// Account email.
        #[arg(long)]
        email: String,
    },
    /// Set a new password using an emailed reset token.
    ResetPassword {
        /// Token from the reset email.
        #[arg(long)]
        token: String,
        /// New password.
        #[arg(long)]
        password: String,
        /// New password again.
        #[arg(long)]
        confirm: String,
    },
    /// List recent transactions.
    Transactions,
    /// List linked cards.
    Cards,
    /// List banks.
    Banks,
    /// List countries.
    Countries,
    /// List the states of a country.
    States {
        /// Country code, matched exactly (`NG`).
        code: String,
    },
    /// Inspect or edit saved form drafts.
    Draft {
        /// Draft operation.
        #[command(subcommand)]
        action: DraftCommand,
    },
}

/// Draft operations.
#[derive(Debug, Clone, Subcommand)]
pub enum DraftCommand {
    /// Print a form's current draft.
    Show {
        /// Form to read.
        form: FormKind,
    },
    /// Update fields of a form's draft.
    Set {
        /// Form to edit.
        form: FormKind,
        /// `field=value` pairs using camelCase field names.
        #[arg(required = true, value_parser = parse_assignment)]
        fields: Vec<(String, String)>,
    },
    /// Delete a form's draft.
    Clear {
        /// Form to reset.
        form: FormKind,
    },
    /// Delete every draft.
    Sweep,
}

/// Forms with persisted drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormKind {
    /// Bank transfer.
    Transfer,
    /// Bill payment.
    BillPayment,
    /// Gift card purchase.
    GiftCard,
    /// Hotel booking.
    HotelBooking,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got '{raw}'"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }
    Ok((field.to_owned(), value.to_owned()))
}

/// Failures reported by the command-line adapter.
#[derive(Debug, Error)]
pub enum CliError {
    /// A service or validation error.
    #[error(transparent)]
    Service(#[from] DomainError),
    /// Arguments were well formed but unusable.
    #[error("invalid input: {0}")]
    Input(String),
    /// No cached session, or it could not be restored.
    #[error("not signed in")]
    NotSignedIn,
    /// The command was abandoned before the service answered.
    #[error("cancelled before the service responded")]
    Cancelled,
    /// Output could not be encoded.
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Wires commands to the backend, storage, and clock.
pub struct CliApp<S>
where
    S: KeyValueStore + ?Sized,
{
    backend: Arc<MockBackend>,
    storage: Arc<S>,
    clock: Arc<dyn Clock>,
    session: SessionController<MockBackend, S>,
    lifetime: LifetimeHandle,
}

impl<S> CliApp<S>
where
    S: KeyValueStore + ?Sized,
{
    /// Build the adapter. Service calls are abandoned once `lifetime` closes.
    pub fn new(
        backend: Arc<MockBackend>,
        storage: Arc<S>,
        clock: Arc<dyn Clock>,
        lifetime: LifetimeHandle,
    ) -> Self {
        let session = SessionController::new(Arc::clone(&backend), Arc::clone(&storage));
        Self {
            backend,
            storage,
            clock,
            session,
            lifetime,
        }
    }

    async fn call<T, Fut>(&self, request: Fut) -> Result<T, CliError>
    where
        Fut: Future<Output = Result<T, DomainError>>,
    {
        let mut state = RequestState::Idle;
        state.run(&self.lifetime, request).await;
        match state {
            RequestState::Succeeded(value) => Ok(value),
            RequestState::Failed(error) => Err(CliError::Service(error)),
            RequestState::Idle | RequestState::Loading => Err(CliError::Cancelled),
        }
    }

    /// Run `command`, writing its JSON result to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] when validation or the service fails, or when
    /// output cannot be written.
    pub async fn run<W: Write>(&self, command: Command, out: &mut W) -> Result<(), CliError> {
        match command {
            Command::Login { email, password } => {
                let credentials = LoginCredentials::new(&email, &password);
                let session = self.call(self.session.login(&credentials)).await?;
                emit(out, &session)
            }
            Command::Signup {
                first_name,
                last_name,
                email,
                phone,
                password,
            } => {
                let request = SignupRequest {
                    first_name,
                    last_name,
                    email,
                    phone,
                    password: password.into(),
                };
                let session = self.call(self.session.signup(&request)).await?;
                emit(out, &session)
            }
            Command::Whoami => match self.lifetime.guard(self.session.restore()).await {
                Some(SessionState::LoggedIn(user)) => emit(out, &user),
                Some(SessionState::LoggedOut) => Err(CliError::NotSignedIn),
                None => Err(CliError::Cancelled),
            },
            Command::Logout => {
                self.call(self.session.logout()).await?;
                emit(out, &json!({ "status": "signed_out" }))
            }
            Command::ForgotPassword { email } => {
                emit(out, &self.call(self.session.forgot_password(&email)).await?)
            }
            Command::ResetPassword {
                token,
                password,
                confirm,
            } => {
                let reset = self.session.reset_password(&token, &password, &confirm);
                emit(out, &self.call(reset).await?)
            }
            Command::Transactions => emit(out, &self.call(self.backend.transactions()).await?),
            Command::Cards => emit(out, &self.call(self.backend.cards()).await?),
            Command::Banks => emit(out, &self.call(self.backend.banks()).await?),
            Command::Countries => emit(out, &self.call(self.backend.countries()).await?),
            Command::States { code } => emit(out, &self.call(self.backend.states(&code)).await?),
            Command::Draft { action } => self.run_draft(action, out),
        }
    }

    fn run_draft<W: Write>(&self, action: DraftCommand, out: &mut W) -> Result<(), CliError> {
        match action {
            DraftCommand::Sweep => {
                let removed = clear_all_drafts(self.storage.as_ref());
                emit(out, &json!({ "removed": removed }))
            }
            DraftCommand::Show { form } => self.dispatch(form, DraftAction::Show, out),
            DraftCommand::Set { form, fields } => self.dispatch(form, DraftAction::Set(fields), out),
            DraftCommand::Clear { form } => self.dispatch(form, DraftAction::Clear, out),
        }
    }

    fn dispatch<W: Write>(
        &self,
        form: FormKind,
        action: DraftAction,
        out: &mut W,
    ) -> Result<(), CliError> {
        match form {
            FormKind::Transfer => self.apply::<TransferForm, W>(TransferForm::NAME, action, out),
            FormKind::BillPayment => {
                self.apply::<BillPaymentForm, W>(BillPaymentForm::NAME, action, out)
            }
            FormKind::GiftCard => self.apply::<GiftCardForm, W>(GiftCardForm::NAME, action, out),
            FormKind::HotelBooking => {
                self.apply::<HotelBookingForm, W>(HotelBookingForm::NAME, action, out)
            }
        }
    }

    fn apply<F, W>(&self, name: &str, action: DraftAction, out: &mut W) -> Result<(), CliError>
    where
        F: DraftForm + Default,
        W: Write,
    {
        let name = FormName::new(name).map_err(|err| CliError::Input(err.to_string()))?;
        let mut store = FormDraftStore::initialize(
            name,
            F::default(),
            Arc::clone(&self.storage),
            Arc::clone(&self.clock),
        );
        match action {
            DraftAction::Show => emit(out, store.state()),
            DraftAction::Set(fields) => {
                let patch = patch_from_assignments(&F::default(), &fields)?;
                emit(out, store.update(patch))
            }
            DraftAction::Clear => {
                store.clear();
                emit(out, store.state())
            }
        }
    }
}

enum DraftAction {
    Show,
    Set(Vec<(String, String)>),
    Clear,
}

/// Build a typed patch from `field=value` pairs.
///
/// Each value is read as a number when the form's default for that field is
/// numeric, and as a string otherwise.
fn patch_from_assignments<F: DraftForm>(
    template: &F,
    fields: &[(String, String)],
) -> Result<F::Patch, CliError> {
    let template = serde_json::to_value(template)?;
    let mut patch = Map::new();
    for (field, raw) in fields {
        let value = match template.get(field) {
            Some(Value::Number(_)) => raw.trim().parse::<u64>().map(Value::from).map_err(|_| {
                CliError::Input(format!("{field} must be a whole number, got '{raw}'"))
            })?,
            Some(_) => Value::String(raw.clone()),
            None => return Err(CliError::Input(format!("unknown field '{field}'"))),
        };
        patch.insert(field.clone(), value);
    }
    serde_json::from_value(Value::Object(patch)).map_err(|err| CliError::Input(err.to_string()))
}

fn emit<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
