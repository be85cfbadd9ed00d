//! Line-based navigation shell.
//!
//! The headless stand-in for the browser shell: reads commands from
//! stdin, drives the navigator against the live session, and performs
//! logins through the account-service client.

use std::io::{self, BufRead, Write};

use lectern_api::{AuthApi, LoginRequest, LoginResponse};
use lectern_routing::{NavigationOutcome, Navigator, Notifier};
use lectern_session::Session;

/// Notifier that prints notices to the console, where the shell user is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("! {message}");
    }
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Login { username: String, password: String },
    Logout,
    Go { path: String },
    WhoAmI,
    Roles,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. `Ok(None)` means a blank line.
    fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(None);
        };

        let command = match word {
            "login" => {
                let (Some(username), Some(password)) = (parts.next(), parts.next()) else {
                    return Err("usage: login <username> <password>".to_string());
                };
                Self::Login {
                    username: username.to_string(),
                    password: password.to_string(),
                }
            }
            "logout" => Self::Logout,
            "go" => {
                let Some(path) = parts.next() else {
                    return Err("usage: go <path>".to_string());
                };
                Self::Go {
                    path: path.to_string(),
                }
            }
            "whoami" => Self::WhoAmI,
            "roles" => Self::Roles,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command '{other}', try 'help'")),
        };
        Ok(Some(command))
    }
}

/// The interactive session: navigator, API client, and the one session.
pub struct Shell {
    navigator: Navigator,
    api: Box<dyn AuthApi>,
    session: Session,
}

impl Shell {
    /// Creates a shell with a fresh, logged-out session.
    #[must_use]
    pub fn new(navigator: Navigator, api: Box<dyn AuthApi>) -> Self {
        Self {
            navigator,
            api,
            session: Session::new(),
        }
    }

    /// Runs the read-dispatch loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if stdin or stdout fails.
    pub async fn run(&mut self) -> io::Result<()> {
        println!("lectern navigation shell ('help' lists commands)");
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("lectern> ");
            io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    if !self.dispatch(command).await {
                        break;
                    }
                }
                Err(message) => println!("{message}"),
            }
        }
        Ok(())
    }

    /// Executes one command. Returns false when the shell should exit.
    async fn dispatch(&mut self, command: Command) -> bool {
        match command {
            Command::Login { username, password } => {
                match self.api.login(&LoginRequest::new(username, password)).await {
                    Ok(response) => {
                        let LoginResponse {
                            token,
                            account_id,
                            position_id,
                            position_name,
                            expires_in,
                        } = response;
                        self.session.login_success(
                            token,
                            account_id,
                            position_id,
                            &position_name,
                            expires_in,
                        );
                        let role = self.session.role().expect("just logged in");
                        println!("logged in as role '{role}'");
                    }
                    Err(report) => println!("login failed: {report}"),
                }
            }
            Command::Logout => {
                self.session.logout();
                println!("logged out");
            }
            Command::Go { path } => match self.navigator.navigate(&mut self.session, &path) {
                NavigationOutcome::Allowed { route, params } => {
                    if params.is_empty() {
                        println!("-> {route}");
                    } else {
                        let mut bound: Vec<_> =
                            params.iter().map(|(k, v)| format!("{k}={v}")).collect();
                        bound.sort();
                        println!("-> {route} ({})", bound.join(", "));
                    }
                }
                NavigationOutcome::Redirected { to, .. } => {
                    println!("-> redirected to '{to}'");
                }
                NavigationOutcome::NotFound { path } => {
                    println!("no page at '{path}'");
                }
            },
            Command::WhoAmI => {
                if let (Some(account), Some(role)) =
                    (self.session.account_id(), self.session.role())
                {
                    println!("account {account}, role '{role}'");
                } else {
                    println!("not logged in");
                }
            }
            Command::Roles => match self.api.fetch_roles().await {
                Ok(positions) => {
                    for position in positions {
                        println!("{}: {}", position.id, position.name);
                    }
                }
                Err(report) => println!("could not fetch roles: {report}"),
            },
            Command::Help => {
                println!("commands:");
                println!("  login <username> <password>");
                println!("  logout");
                println!("  go <path>");
                println!("  whoami");
                println!("  roles");
                println!("  quit");
            }
            Command::Quit => return false,
        }
        true
    }
}
