//! Line-driven account view.

use futures_util::future::Either;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::services::{
    AccountPanelCoordinator, PanelEvent, PanelSelection, PanelServices,
};
use crate::domain::entities::{AccountRef, Panel};
use crate::presentation::commands::{Command, HELP};
use crate::presentation::widgets::TimelinePanelState;

/// Hosts the coordinator of the displayed account and feeds it user commands.
pub struct App {
    services: PanelServices,
    accounts: Vec<AccountRef>,
    coordinator: Option<AccountPanelCoordinator>,
    events_tx: mpsc::UnboundedSender<PanelEvent>,
    events_rx: mpsc::UnboundedReceiver<PanelEvent>,
    running: bool,
}

impl App {
    #[must_use]
    pub fn new(services: PanelServices, accounts: Vec<AccountRef>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            services,
            accounts,
            coordinator: None,
            events_tx,
            events_rx,
            running: true,
        }
    }

    /// Runs until `quit`, end of input or Ctrl-C.
    ///
    /// # Errors
    /// Returns error if reading standard input fails.
    pub async fn run(mut self, initial: Option<AccountRef>) -> color_eyre::Result<()> {
        match initial {
            Some(account) => self.show_account(account),
            None => println!("No accounts configured. Use `account user@instance`."),
        }
        println!("{}", self.status_line());

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        while self.running {
            let action_future = match self.coordinator.as_mut() {
                Some(coordinator) => Either::Left(coordinator.next_action()),
                None => Either::Right(std::future::pending()),
            };

            tokio::select! {
                Some(action) = action_future => {
                    if let Some(coordinator) = self.coordinator.as_mut() {
                        coordinator.handle_action(action);
                    }
                }
                Some(event) = self.events_rx.recv() => {
                    info!(?event, "Panel event");
                    println!("{}", Self::describe_event(&event));
                }
                line = lines.next_line() => match line? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => {
                        let reply = match line.parse::<Command>() {
                            Ok(command) => self.handle_command(command),
                            Err(e) => Some(e.to_string()),
                        };
                        if let Some(reply) = reply {
                            println!("{reply}");
                        }
                    }
                    None => {
                        debug!("Input closed");
                        self.running = false;
                    }
                },
                _ = &mut ctrl_c => {
                    info!("Interrupted");
                    self.running = false;
                }
            }
        }

        self.close_account();
        info!("Application exiting normally");
        Ok(())
    }

    /// Displays `account`, reusing the current coordinator when one exists.
    pub fn show_account(&mut self, account: AccountRef) {
        let coordinator = self.coordinator.get_or_insert_with(|| {
            let mut coordinator =
                AccountPanelCoordinator::new(self.services.clone(), self.events_tx.clone());
            for panel in Panel::ALL.into_iter().filter(|p| p.is_timeline()) {
                coordinator.attach_view(panel, Box::new(TimelinePanelState::new(panel)));
            }
            coordinator
        });
        coordinator.assign(account);
    }

    /// Removes the account view.
    pub fn close_account(&mut self) {
        if let Some(coordinator) = self.coordinator.take() {
            coordinator.destroy();
        }
    }

    /// Applies a command and returns the text to show, if any.
    pub fn handle_command(&mut self, command: Command) -> Option<String> {
        match command {
            Command::Quit => {
                self.running = false;
                None
            }
            Command::Help => Some(HELP.to_string()),
            Command::SwitchAccount(name) => {
                let Some(account) = self.find_account(&name) else {
                    return Some(format!("unknown account: {name}"));
                };
                self.show_account(account);
                Some(self.status_line())
            }
            Command::CloseAccount => {
                self.close_account();
                Some("account view closed".to_string())
            }
            Command::Status => Some(self.status_line()),
            command => self.forward(command),
        }
    }

    fn forward(&mut self, command: Command) -> Option<String> {
        let Some(coordinator) = self.coordinator.as_mut() else {
            return Some("no account displayed".to_string());
        };

        match command {
            Command::SelectPanel(panel) => match coordinator.select_panel(panel) {
                PanelSelection::Switched { to, .. } => Some(format!("showing {to}")),
                PanelSelection::ScrolledToTop(panel) => Some(format!("{panel}: back to top")),
            },
            Command::BrowseLocalAccount => {
                coordinator.browse_local_account();
                None
            }
            Command::OpenProfile => {
                (!coordinator.open_local_account()).then(|| "profile not available yet".to_string())
            }
            Command::BrowseAccount(name) => {
                coordinator.browse_account(name);
                None
            }
            Command::BrowseHashtag(tag) => {
                coordinator.browse_hashtag(tag);
                None
            }
            other => {
                warn!(?other, "Unhandled command");
                None
            }
        }
    }

    fn find_account(&self, name: &str) -> Option<AccountRef> {
        AccountRef::find(&self.accounts, name)
            .cloned()
            .or_else(|| AccountRef::parse_handle(name))
    }

    /// One-line summary of the displayed account.
    #[must_use]
    pub fn status_line(&self) -> String {
        let Some(coordinator) = &self.coordinator else {
            return "[no account]".to_string();
        };
        let Some(account) = coordinator.account() else {
            return "[no account]".to_string();
        };

        let badges = coordinator.badges();
        let name = coordinator
            .account_record()
            .map_or_else(|| account.handle(), |r| r.display_name().to_string());
        let flag = |on: bool| if on { "*" } else { "" };

        let panels: Vec<String> = Panel::ALL
            .iter()
            .filter(|p| **p != Panel::Bookmarks || coordinator.bookmarks_available())
            .map(|p| {
                let marker = match p {
                    Panel::Notifications => flag(badges.has_notifications),
                    Panel::Mentions => flag(badges.has_mentions),
                    _ => "",
                };
                if *p == coordinator.active_panel() {
                    format!("[{p}{marker}]")
                } else {
                    format!("{p}{marker}")
                }
            })
            .collect();

        format!("{name} | {}", panels.join(" "))
    }

    fn describe_event(event: &PanelEvent) -> String {
        match event {
            PanelEvent::BrowseAccount(name) => format!("-> account {name}"),
            PanelEvent::BrowseHashtag(tag) => format!("-> #{tag}"),
            PanelEvent::BrowseThread(thread) => format!("-> thread {}", thread.status_url),
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn coordinator(&self) -> Option<&AccountPanelCoordinator> {
        self.coordinator.as_ref()
    }
}
