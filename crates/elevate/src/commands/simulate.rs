//! `simulate` command implementation.
//!
//! Replays an event script against the menu state machine using recording
//! mock elements and a manual clock, printing the state after every step.

use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

use clap::Args;
use elevate_config::CliSettings;
use elevate_menu::mock::{HostEvent, HostLog, MockDocument, MockHandle};
use elevate_menu::{ClickOutcome, Menu, MenuNode, MenuOptions, PathId, anchor_from_url};
use elevate_mobile::mock::MockViewport;
use elevate_mobile::{ManualClock, MobilePanel, PanelOptions};

use super::{load_menu_entries, panel_options};
use crate::error::CliError;
use crate::output::Output;
use crate::script::{Step, parse_script};

const NAV_ID: &str = "nav";

/// Arguments for the simulate command.
#[derive(Args)]
pub(crate) struct SimulateArgs {
    /// Path to configuration file (default: auto-discover elevate.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Menu source file (JSON or YAML), overrides config.
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Drive the mobile slide-out panel instead of the desktop menu.
    #[arg(long)]
    mobile: bool,

    /// Selector that exists on the simulated page (repeatable).
    ///
    /// Defaults to every anchor the menu links to.
    #[arg(long = "target", value_name = "SELECTOR")]
    targets: Vec<String>,

    /// Event script, or `-` to read from stdin.
    script: PathBuf,
}

impl SimulateArgs {
    /// Execute the simulate command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the script is invalid or it uses
    /// mobile-only events without `--mobile`.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let cli_settings = CliSettings {
            source: self.source.clone(),
            max_depth: None,
        };
        let (config, entries) = load_menu_entries(self.config.as_deref(), &cli_settings)?;

        let script = if self.script.as_os_str() == "-" {
            io::read_to_string(io::stdin())?
        } else {
            std::fs::read_to_string(&self.script)?
        };
        let steps = parse_script(&script)?;

        let targets = if self.targets.is_empty() {
            menu_anchors(&entries)
        } else {
            self.targets
        };
        let mut simulation = if self.mobile {
            Simulation::mobile(
                &entries,
                config.menu.menu_options(),
                panel_options(&config.mobile),
                &targets,
            )
        } else {
            if let Some(step) = steps.iter().find(|step| step.is_mobile_only()) {
                return Err(CliError::Validation(format!("'{step}' requires --mobile")));
            }
            Simulation::desktop(&entries, config.menu.menu_options(), &targets)
        };

        output.highlight(&format!(
            "Simulating {} steps ({})",
            steps.len(),
            if self.mobile { "mobile" } else { "desktop" }
        ));
        output.result(&format!("  0 {:<24} {}", "start", simulation.snapshot()))?;
        for (index, step) in steps.iter().enumerate() {
            for line in simulation.step(index + 1, step) {
                output.result(&line)?;
            }
        }
        output.info("");
        output.detail(&format!("Final state: {}", simulation.snapshot()));
        Ok(())
    }
}

/// Every distinct anchor the menu links to.
fn menu_anchors(entries: &[MenuNode]) -> Vec<String> {
    fn walk(nodes: &[MenuNode], out: &mut Vec<String>) {
        for node in nodes {
            let anchor = anchor_from_url(&node.url);
            if !anchor.is_empty() && !out.contains(&anchor) {
                out.push(anchor);
            }
            walk(&node.children, out);
        }
    }

    let mut anchors = Vec::new();
    walk(entries, &mut anchors);
    anchors
}

enum Host {
    Desktop {
        menu: Menu<MockHandle>,
        document: MockDocument,
    },
    Mobile {
        panel: MobilePanel<MockHandle, ManualClock>,
        viewport: MockViewport,
    },
}

/// Menu driven by scripted events.
struct Simulation {
    host: Host,
    log: HostLog,
}

impl Simulation {
    fn desktop(entries: &[MenuNode], options: MenuOptions, targets: &[String]) -> Self {
        let log = HostLog::default();
        let mut menu = Menu::new(entries, options);
        mount(&mut menu, &log);
        let document = targets
            .iter()
            .fold(MockDocument::new(log.clone()), |document, target| {
                document.with_target(target.clone())
            });
        Self {
            host: Host::Desktop { menu, document },
            log,
        }
    }

    fn mobile(
        entries: &[MenuNode],
        options: MenuOptions,
        panel_options: PanelOptions,
        targets: &[String],
    ) -> Self {
        let log = HostLog::default();
        let mut panel = MobilePanel::new(entries, options, panel_options, ManualClock::new());
        mount(panel.menu_mut(), &log);
        let viewport = targets
            .iter()
            .fold(MockViewport::new(log.clone()), |viewport, target| {
                viewport.with_target(target.clone())
            });
        Self {
            host: Host::Mobile { panel, viewport },
            log,
        }
    }

    fn menu(&self) -> &Menu<MockHandle> {
        match &self.host {
            Host::Desktop { menu, .. } => menu,
            Host::Mobile { panel, .. } => panel.menu(),
        }
    }

    fn menu_mut(&mut self) -> &mut Menu<MockHandle> {
        match &mut self.host {
            Host::Desktop { menu, .. } => menu,
            Host::Mobile { panel, .. } => panel.menu_mut(),
        }
    }

    /// Apply one step and describe what happened.
    ///
    /// The first line is the step with the resulting state, followed by an
    /// optional outcome line and the recorded host interactions.
    fn step(&mut self, number: usize, step: &Step) -> Vec<String> {
        let note = self.apply(step);
        let mut lines = vec![format!("{number:>3} {:<24} {}", step.to_string(), self.snapshot())];
        if let Some(note) = note {
            lines.push(format!("      = {note}"));
        }
        lines.extend(
            self.log
                .take()
                .iter()
                .map(|event| format!("      > {}", describe_event(event))),
        );
        lines
    }

    fn apply(&mut self, step: &Step) -> Option<String> {
        match step {
            Step::Key(target, key) => {
                let outcome = self.menu_mut().handle_keydown(target, *key);
                let mut note = String::new();
                if outcome.prevent_default {
                    note.push_str("default prevented");
                }
                if let Some(path) = outcome.clicked {
                    let clicked = self.click(&path);
                    if !note.is_empty() {
                        note.push_str(", ");
                    }
                    write!(note, "clicked {path}: {}", describe_click(&clicked)).unwrap();
                }
                (!note.is_empty()).then_some(note)
            }
            Step::Hover(path) => {
                self.menu_mut().mouse_enter(path);
                None
            }
            Step::Leave(path) => {
                self.menu_mut().mouse_leave(path);
                None
            }
            Step::Focus(path) => {
                self.menu_mut().handle_focus(path);
                None
            }
            Step::Blur => {
                self.menu_mut().handle_blur();
                None
            }
            Step::Click(path) => Some(describe_click(&self.click(path))),
            Step::Back => Some(match self.menu_mut().go_back() {
                Some(path) => format!("closed {path}"),
                None => "already at top level".to_owned(),
            }),
            Step::Arrow(path) => match &mut self.host {
                Host::Mobile { panel, .. } => Some(if panel.click_arrow(path) {
                    format!("opened {path}")
                } else {
                    format!("{path} not opened")
                }),
                Host::Desktop { .. } => None,
            },
            Step::Toggle => match &mut self.host {
                Host::Mobile { panel, viewport } => {
                    panel.toggle(viewport);
                    None
                }
                Host::Desktop { .. } => None,
            },
            Step::Wait(duration) => match &mut self.host {
                Host::Mobile { panel, viewport } => {
                    panel.clock().advance(*duration);
                    let mut fired = 0;
                    while panel.poll_timers(viewport) {
                        fired += 1;
                    }
                    (fired > 0).then(|| format!("{fired} timer(s) fired"))
                }
                Host::Desktop { .. } => None,
            },
        }
    }

    fn click(&mut self, path: &PathId) -> ClickOutcome {
        match &mut self.host {
            Host::Desktop { menu, document } => menu.click_item(path, document, None),
            Host::Mobile { panel, viewport } => panel.click_item(path, viewport),
        }
    }

    /// One-line summary of the current state.
    fn snapshot(&self) -> String {
        let menu = self.menu();
        let mut out = format!(
            "visible=[{}] triggered=[{}] focused={}",
            join_paths(&menu.visible_paths()),
            join_paths(&menu.triggered_paths()),
            menu.focused_item()
                .map_or_else(|| "-".to_owned(), ToString::to_string)
        );
        if let Host::Mobile { panel, .. } = &self.host {
            write!(out, " phase={:?}", panel.phase()).unwrap();
            if panel.has_pending_scroll() {
                out.push_str(" pending-scroll");
            }
        }
        out
    }
}

fn mount(menu: &mut Menu<MockHandle>, log: &HostLog) {
    menu.mount(|path| MockHandle::new(path.to_string(), log.clone()));
    menu.register_nav(MockHandle::new(NAV_ID, log.clone()));
}

fn join_paths(paths: &[PathId]) -> String {
    paths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_click(outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::FollowLink => "follow link".to_owned(),
        ClickOutcome::Scrolled { anchor, found: true } => format!("scrolled to {anchor}"),
        ClickOutcome::Scrolled { anchor, found: false } => format!("{anchor} not found"),
        ClickOutcome::ScrollDeferred { anchor } => format!("scroll to {anchor} deferred"),
        ClickOutcome::SubmenuTriggered => "submenu opened".to_owned(),
        ClickOutcome::Ignored => "ignored".to_owned(),
    }
}

fn describe_event(event: &HostEvent) -> String {
    match event {
        HostEvent::Focus(id) => format!("focus {id}"),
        HostEvent::Click(id) => format!("click {id}"),
        HostEvent::TabIndex(id, index) => format!("tabindex {id} = {index}"),
        HostEvent::ScrollIntoView { selector, found } => format!(
            "scroll {selector} into view ({})",
            if *found { "found" } else { "missing" }
        ),
        HostEvent::WindowScroll(y) => format!("window scroll to {y}"),
        HostEvent::BodyStyle { property, value } if value.is_empty() => {
            format!("body {property} removed")
        }
        HostEvent::BodyStyle { property, value } => format!("body {property}: {value}"),
    }
}
