use crate::components::{Footer, HelpOverlay, Sidebar, SpaceIndicator, TransitionOverlay};
use crate::config::Config;
use crate::controller::{
    navigable_views, Clock, Overlay, SystemClock, TransitionEvent, TransitionRequest, ViewController,
    ViewId, Workspace,
};
use crate::data::{Fixtures, ResearchRepository};
use crate::keymap::Action;
use crate::screens::{key_press, RenderContext, ScreenAction, ScreenContext, Screens};
use crate::tui::Tui;
use crate::widgets::{ToastManager, ToastMessage, ToastVariant};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Main application state
pub struct App<C: Clock + Clone = SystemClock> {
    config: Config,
    config_path: PathBuf,
    repo: Fixtures,
    clock: C,
    controller: ViewController<C>,
    screens: Screens,
    toasts: ToastManager,
    show_help: bool,
    should_quit: bool,
}

impl App<SystemClock> {
    pub fn new(config: Config, config_path: PathBuf, repo: Fixtures) -> Self {
        Self::with_clock(config, config_path, repo, SystemClock)
    }
}

impl<C: Clock + Clone> App<C> {
    /// Build the app with its timers measured against `clock`.
    pub fn with_clock(config: Config, config_path: PathBuf, repo: Fixtures, clock: C) -> Self {
        let mut controller = ViewController::with_clock(clock.clone(), config.timings())
            .lock_navigation_during_transition(config.lock_navigation_during_transition);
        let start_view = config.start_view();
        if !controller.set_active_view(start_view) || controller.current_screen().is_none() {
            controller.set_active_view(ViewId::Dashboard);
        }
        let screens = Screens::new(&repo, controller.workspace());
        Self {
            config,
            config_path,
            repo,
            clock,
            controller,
            screens,
            toasts: ToastManager::new(),
            show_help: false,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &ViewController<C> {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Message of the toast on screen, if any.
    pub fn toast(&self) -> Option<&ToastMessage> {
        self.toasts.current().map(|t| &t.message)
    }

    /// Ask to open a project's team space, as if the user had picked it.
    pub fn open_project(&mut self, project_id: &str) {
        if self.repo.project(project_id).is_none() {
            self.notify(ToastMessage::error(format!("Unknown project \"{}\"", project_id)));
            return;
        }
        self.controller.select_project(project_id);
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        info!("Starting in {:?} on {}", self.controller.workspace(), self.controller.active_view());

        let result = self.event_loop(tui);

        self.controller.teardown();
        tui.exit()?;
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        let tick_rate = self.config.tick_rate();
        loop {
            self.tick();

            let mut draw_result = Ok(());
            tui.terminal_mut().draw(|frame| {
                draw_result = self.draw(frame);
            })?;
            draw_result?;

            if self.should_quit {
                break;
            }

            if let Some(event) = tui.poll_event(tick_rate)? {
                self.handle_event(event)?;
            }
        }
        Ok(())
    }

    /// Advance timers: commit due transitions and expire toasts.
    pub fn tick(&mut self) {
        if let Some(TransitionEvent::Committed { workspace }) = self.controller.tick() {
            debug!("Reloading screens for {:?}", workspace);
            self.screens = Screens::new(&self.repo, &workspace);
        }
        self.toasts.tick(self.clock.now());
    }

    fn project_name(&self, workspace: &Workspace) -> Option<String> {
        workspace
            .current_project_id()
            .and_then(|id| self.repo.project(id))
            .map(|p| p.name)
    }

    pub fn draw(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let keymap = &self.config.keymap;
        let workspace = self.controller.workspace().clone();
        let project_name = self.project_name(&workspace);

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(area);

        frame.render_widget(
            SpaceIndicator::new(&workspace)
                .project_name(project_name.as_deref())
                .back_key(keymap.get_key_display_for_action(Action::BackToPersonal))
                .transitioning(self.controller.is_transitioning()),
            header,
        );

        let [sidebar, content] =
            Layout::horizontal([Constraint::Length(Sidebar::WIDTH), Constraint::Min(0)]).areas(body);
        frame.render_widget(
            Sidebar::new(&workspace, self.controller.active_view(), keymap),
            sidebar,
        );

        // A view with no route in this workspace draws nothing.
        let footer_text = match self.controller.current_screen() {
            Some(kind) => {
                let screen = self.screens.get_mut(kind);
                screen.render(frame, content, &RenderContext::new(keymap, &workspace))?;
                screen.footer(keymap)
            }
            None => keymap.footer_navigation(),
        };
        Footer::render(frame, footer, &footer_text, &workspace)?;
        self.toasts.render(frame, body);

        if let Some(overlay) = self.controller.overlay() {
            let target = match overlay {
                Overlay::Entering { target, .. } | Overlay::Exiting { target, .. } => target,
            };
            let target_name = self.project_name(target);
            frame.render_widget(
                TransitionOverlay::new(overlay).project_name(target_name.as_deref()),
                area,
            );
        }

        if self.show_help {
            let config_path = self.config_path.display().to_string();
            HelpOverlay::render(frame, area, keymap, &config_path);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        let Some(key) = key_press(&event) else {
            return Ok(());
        };

        if self.show_help {
            self.show_help = false;
            return Ok(());
        }

        let kind = self.controller.current_screen();
        let input_focused = kind.is_some_and(|k| self.screens.get_mut(k).is_input_focused());
        if !input_focused {
            if let Some(action) = self.config.keymap.get_action(key.code, key.modifiers) {
                if self.handle_global_action(action) {
                    return Ok(());
                }
            }
        }

        // The outgoing workspace's screens stay frozen until the switch commits.
        if matches!(self.controller.overlay(), Some(Overlay::Entering { .. })) {
            return Ok(());
        }
        let Some(kind) = kind else {
            return Ok(());
        };

        let now = chrono::Local::now().naive_local();
        let ctx = ScreenContext::new(&self.config.keymap, self.controller.workspace(), now);
        let action = self.screens.get_mut(kind).handle_event(event, &ctx)?;
        self.apply(action);
        Ok(())
    }

    /// Handle app-wide shortcuts. Returns false for actions the screen should see.
    fn handle_global_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::NextView => self.cycle_view(1),
            Action::PrevView => self.cycle_view(-1),
            Action::BackToPersonal if self.controller.workspace().is_project_workspace() => {
                self.apply(ScreenAction::BackToPersonal);
            }
            _ => match action.target_view() {
                Some(view) => self.navigate(view),
                None => return false,
            },
        }
        true
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(view) => self.navigate(view),
            ScreenAction::SelectProject(id) => self.open_project(&id),
            ScreenAction::BackToPersonal => {
                if self.controller.back_to_personal() == TransitionRequest::Ignored {
                    debug!("Back to personal ignored");
                }
            }
            ScreenAction::Toast(message) => self.notify(message),
            ScreenAction::ShowHelp => self.show_help = true,
            ScreenAction::Quit => self.should_quit = true,
        }
    }

    fn navigate(&mut self, view: ViewId) {
        let workspace = self.controller.workspace();
        if !navigable_views(workspace).contains(&view) {
            let message = format!("{} is not available in {}", view.title(), workspace.label());
            self.notify(ToastMessage::warning(message));
            return;
        }
        self.controller.set_active_view(view);
    }

    /// Step through the views of the current workspace, wrapping around.
    fn cycle_view(&mut self, step: isize) {
        let views = navigable_views(self.controller.workspace());
        if views.is_empty() {
            return;
        }
        let current = views
            .iter()
            .position(|v| *v == self.controller.active_view())
            .unwrap_or(0);
        let next = (current as isize + step).rem_euclid(views.len() as isize) as usize;
        self.controller.set_active_view(views[next]);
    }

    fn notify(&mut self, message: ToastMessage) {
        if message.variant == ToastVariant::Error {
            error!("{}", message.message);
        }
        self.toasts.push(message, self.clock.now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ManualClock, ScreenKind};
    use crate::utils::buffer_to_string;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn app() -> (ManualClock, App<ManualClock>) {
        let clock = ManualClock::new();
        let app = App::with_clock(
            Config::default(),
            PathBuf::from("/tmp/researchmate/config.toml"),
            Fixtures::sample(),
            clock.clone(),
        );
        (clock, app)
    }

    fn press(app: &mut App<ManualClock>, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
            .unwrap();
    }

    fn render(app: &mut App<ManualClock>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame).unwrap()).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_number_keys_jump_between_views() {
        let (_, mut app) = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.controller().active_view(), ViewId::Literature);
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.controller().current_screen(), Some(ScreenKind::Projects));
    }

    #[test]
    fn test_unavailable_view_warns_and_stays() {
        let (_, mut app) = app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.controller().active_view(), ViewId::Dashboard);
        assert_eq!(
            app.toast().map(|t| t.message.as_str()),
            Some("Team Hub is not available in Personal Space")
        );
    }

    #[test]
    fn test_tab_cycles_navigable_views() {
        let (_, mut app) = app();
        let views = navigable_views(&Workspace::Personal);
        for expected in views.iter().cycle().skip(1).take(views.len()) {
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.controller().active_view(), *expected);
        }
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.controller().active_view(), *views.last().unwrap());
    }

    #[test]
    fn test_selecting_project_commits_after_delay() {
        let (clock, mut app) = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.controller().is_transitioning());
        assert!(render(&mut app).contains("Entering Team Space"));

        clock.advance(Duration::from_millis(1499));
        app.tick();
        assert!(app.controller().is_transitioning());

        clock.advance(Duration::from_millis(1));
        app.tick();
        assert_eq!(app.controller().workspace(), &Workspace::project("1"));
        assert_eq!(
            app.controller().current_screen(),
            Some(ScreenKind::Dashboard {
                project_workspace: true
            })
        );

        clock.advance(Duration::from_millis(300));
        app.tick();
        let text = render(&mut app);
        assert!(text.contains("Team Space · AI in Healthcare Literature Review"));
        assert!(!text.contains("Entering Team Space"));
    }

    #[test]
    fn test_screen_keys_blocked_while_entering() {
        let (_, mut app) = app();
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Enter);
        assert!(app.controller().is_transitioning());

        // A second pick during the transition must not change the target.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller().pending_workspace(), Some(&Workspace::project("1")));
    }

    #[test]
    fn test_back_to_personal_only_inside_project() {
        let (clock, mut app) = app();
        press(&mut app, KeyCode::Char('b'));
        assert!(!app.controller().is_transitioning());

        app.open_project("2");
        clock.advance(Duration::from_millis(1500));
        app.tick();
        assert!(app.controller().workspace().is_project_workspace());

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.controller().pending_workspace(), Some(&Workspace::Personal));
        clock.advance(Duration::from_millis(1500));
        app.tick();
        assert_eq!(app.controller().workspace(), &Workspace::Personal);
    }

    #[test]
    fn test_unknown_project_is_rejected() {
        let (_, mut app) = app();
        app.open_project("nope");
        assert!(!app.controller().is_transitioning());
        assert_eq!(
            app.toast().map(|t| t.variant),
            Some(ToastVariant::Error)
        );
    }

    #[test]
    fn test_typing_in_search_does_not_trigger_shortcuts() {
        let (_, mut app) = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('3'));
        assert!(!app.should_quit());
        assert_eq!(app.controller().active_view(), ViewId::Literature);
    }

    #[test]
    fn test_help_overlay_toggles() {
        let (_, mut app) = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.is_help_visible());
        assert!(render(&mut app).contains("Keyboard Shortcuts"));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.is_help_visible());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_quit() {
        let (_, mut app) = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_start_view_falls_back_when_unroutable() {
        let config = Config {
            start_view: "team".to_string(),
            ..Config::default()
        };
        let app = App::with_clock(
            config,
            PathBuf::from("config.toml"),
            Fixtures::sample(),
            ManualClock::new(),
        );
        assert_eq!(app.controller().active_view(), ViewId::Dashboard);
    }
}
