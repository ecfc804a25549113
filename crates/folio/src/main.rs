use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use folio_background::RainState;
use folio_boot::BootSequence;
use folio_config::Config;
use folio_content::boot;
use folio_core::{AnimationSpeed, BackgroundStyle, Page, theme};

mod clipboard;
mod form;
mod mailto;
mod pages;

use form::{ContactForm, CopyIndicator, Field};
use pages::projects::ProjectFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to default configuration");
        Config::default()
    });

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// Log to a file in the cache directory; writing to stderr would corrupt
/// the alternate screen.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let Some(dirs) = directories::ProjectDirs::from("", "", "folio") else {
        return;
    };
    let dir = dirs.cache_dir().to_path_buf();
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("folio.log")) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Boot script for a page, verbatim from the site.
fn boot_script(page: Page) -> &'static [&'static str] {
    match page {
        Page::Home => boot::HOME,
        Page::About => boot::ABOUT,
        Page::Skills => boot::SKILLS,
        Page::Projects => boot::PROJECTS,
        Page::Testimonials => boot::TESTIMONIALS,
        Page::Contact => boot::CONTACT,
    }
}

/// Open an external link with the OS default handler. Fire-and-forget.
fn open_external(url: &str) {
    if let Err(err) = webbrowser::open(url) {
        tracing::warn!(%err, url, "failed to open external link");
    }
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Monotonic clock all animations are driven from.
    started: Instant,
    /// Currently routed page.
    page: Page,
    /// Background effect selection.
    background: BackgroundStyle,
    /// Background animation speed.
    speed: AnimationSpeed,
    /// Glyph rain state.
    rain: RainState,
    /// Boot sequence of the current page; recreated on every page switch.
    boot: BootSequence,
    /// Completion signal of the current boot sequence.
    boot_complete: bool,
    // Home page
    typed_since_ms: Option<u64>,
    command_index: usize,
    // Skills page
    category_index: usize,
    // Projects page
    project_filter: ProjectFilter,
    project_index: usize,
    // Testimonials carousel
    testimonial_index: usize,
    carousel_at_ms: u64,
    // Contact page
    form: ContactForm,
    email_copied: CopyIndicator,
    phone_copied: CopyIndicator,
    /// Mailto URL awaiting handoff on the next tick, so the loading state
    /// is observable for at least one frame.
    pending_mailto: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            started: Instant::now(),
            page: Page::Home,
            background: config.background,
            speed: config.animation_speed,
            rain: RainState::new(),
            boot: BootSequence::new(Vec::new(), config.boot_interval_ms, config.boot_settle_ms),
            boot_complete: false,
            typed_since_ms: None,
            command_index: 0,
            category_index: 0,
            project_filter: ProjectFilter::All,
            project_index: 0,
            testimonial_index: 0,
            carousel_at_ms: 0,
            form: ContactForm::default(),
            email_copied: CopyIndicator::default(),
            phone_copied: CopyIndicator::default(),
            pending_mailto: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.mount_page(self.now_ms());
        while self.running {
            self.tick(self.now_ms());
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Milliseconds since the application started.
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Switch to a page, tearing down the old boot sequence.
    fn set_page(&mut self, page: Page, now_ms: u64) {
        if page == self.page {
            return;
        }
        self.page = page;
        self.mount_page(now_ms);
    }

    /// (Re)start the boot sequence and per-page state for the current page.
    fn mount_page(&mut self, now_ms: u64) {
        let script = boot_script(self.page).iter().map(|s| s.to_string()).collect();
        // restart drops every pending deadline of the previous page, so a
        // torn-down sequence can never reveal lines or complete afterwards.
        self.boot.restart(script, now_ms);
        self.boot_complete = false;
        self.typed_since_ms = None;
        self.command_index = 0;
        self.project_index = 0;
        self.form.editing = false;
    }

    /// Advance all timed state to `now_ms`.
    fn tick(&mut self, now_ms: u64) {
        if self.boot.tick(now_ms) {
            self.boot_complete = true;
            self.typed_since_ms = Some(now_ms);
            self.carousel_at_ms = now_ms;
        }

        // Perform the mail handoff scheduled by a submit keypress.
        if let Some(url) = self.pending_mailto.take() {
            let dispatched = mailto::open(&url);
            self.form.finish(now_ms, dispatched);
        }
        self.form.tick(now_ms);

        if self.page == Page::Testimonials
            && self.boot_complete
            && now_ms.saturating_sub(self.carousel_at_ms) >= pages::testimonials::ROTATE_MS
        {
            self.testimonial_index = (self.testimonial_index + 1) % folio_content::TESTIMONIALS.len();
            self.carousel_at_ms = now_ms;
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let now_ms = self.now_ms();
        self.rain.render(frame, self.background, now_ms, self.speed);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Navbar
            Constraint::Fill(1),   // Page body
            Constraint::Length(1), // Help line
        ])
        .split(frame.area());

        self.render_navbar(frame, chunks[0]);

        if self.boot_complete {
            match self.page {
                Page::Home => pages::home::render(self, frame, chunks[1], now_ms),
                Page::About => pages::about::render(frame, chunks[1]),
                Page::Skills => pages::skills::render(self, frame, chunks[1]),
                Page::Projects => pages::projects::render(self, frame, chunks[1]),
                Page::Testimonials => pages::testimonials::render(self, frame, chunks[1]),
                Page::Contact => pages::contact::render(self, frame, chunks[1], now_ms),
            }
        } else {
            pages::render_boot_log(self.boot.revealed(), frame, chunks[1]);
        }

        self.render_help(frame, chunks[2]);
    }

    /// Top navigation bar: prompt, page tabs, local clock.
    fn render_navbar(&self, frame: &mut Frame, area: Rect) {
        let block = pages::panel("");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cols = Layout::horizontal([
            Constraint::Length(18),
            Constraint::Fill(1),
            Constraint::Length(10),
        ])
        .split(inner);

        let prompt = Line::from(vec![
            Span::styled("▮ ", Style::new().fg(theme::BRIGHT)),
            Span::styled("LYLE@PORTFOLIO", Style::new().fg(theme::TEXT).bold()),
        ]);
        frame.render_widget(Paragraph::new(prompt), cols[0]);

        let mut spans: Vec<Span> = Vec::new();
        for (i, page) in Page::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::new().fg(theme::DIM)));
            }
            let label = format!("{} {}", i + 1, page.title());
            let style = if page == self.page {
                Style::new().fg(theme::SURFACE).bg(theme::BRIGHT).bold()
            } else {
                Style::new().fg(theme::ACCENT)
            };
            spans.push(Span::styled(label, style));
        }
        let tabs = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(tabs, cols[1]);

        let clock = chrono::Local::now().format("%H:%M:%S").to_string();
        let clock = Paragraph::new(clock)
            .style(Style::new().fg(theme::ACCENT))
            .alignment(Alignment::Right);
        frame.render_widget(clock, cols[2]);
    }

    /// Bottom help line, context-sensitive per page.
    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            "q".bold().fg(theme::BRIGHT),
            " quit  ".dark_gray(),
            "tab/1-6".bold().fg(theme::BRIGHT),
            " page  ".dark_gray(),
            "b".bold().fg(theme::BRIGHT),
            " rain  ".dark_gray(),
            "a".bold().fg(theme::BRIGHT),
            format!(" speed:{}  ", self.speed.label()).dark_gray(),
        ];
        if self.boot_complete {
            let extra: &[(&str, &str)] = match self.page {
                Page::Home => &[("↑↓", " command  "), ("enter", " run")],
                Page::Skills => &[("←→", " category")],
                Page::Projects => &[
                    ("←→", " filter  "),
                    ("↑↓", " select  "),
                    ("o", " open  "),
                    ("g", " github"),
                ],
                Page::Testimonials => &[("←→", " testimonial")],
                Page::Contact => if self.form.editing {
                    &[("esc", " done  "), ("tab", " next field")]
                } else {
                    &[
                        ("↑↓", " field  "),
                        ("enter", " edit  "),
                        ("s", " send  "),
                        ("c", " copy email  "),
                        ("p", " copy phone"),
                    ]
                },
                Page::About => &[],
            };
            for (key, desc) in extra {
                spans.push(key.bold().fg(theme::BRIGHT));
                spans.push(desc.dark_gray());
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with one rain-frame timeout so animations stay smooth.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let now_ms = self.now_ms();
                    self.on_key_event(key, now_ms);
                }
                Event::Mouse(_) => {}
                // The rain field recomputes its columns from the frame area
                // on the next draw.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent, now_ms: u64) {
        if self.page == Page::Contact && self.form.editing {
            self.on_form_key(key);
            return;
        }

        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Tab) => self.set_page(self.page.next(), now_ms),
            (_, KeyCode::BackTab) => self.set_page(self.page.prev(), now_ms),
            (_, KeyCode::Char(digit @ '1'..='6')) => {
                if let Some(page) = Page::from_digit(digit) {
                    self.set_page(page, now_ms);
                }
            }
            (_, KeyCode::Char('b')) => self.background = self.background.toggle(),
            (_, KeyCode::Char('a')) => self.speed = self.speed.next(),
            _ if self.boot_complete => self.on_page_key(key, now_ms),
            _ => {}
        }
    }

    /// Keys while the contact form is in insert mode.
    fn on_form_key(&mut self, key: KeyEvent) {
        if key.modifiers == KeyModifiers::CONTROL
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }
        match key.code {
            KeyCode::Esc => self.form.editing = false,
            KeyCode::Tab => self.form.focus = self.form.focus.next(),
            KeyCode::BackTab => self.form.focus = self.form.focus.prev(),
            KeyCode::Enter => {
                // Multi-line input only in the message body.
                if self.form.focus == Field::Message {
                    self.form.input('\n');
                } else {
                    self.form.focus = self.form.focus.next();
                }
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.input(ch);
            }
            _ => {}
        }
    }

    /// Page-local keys, only once the boot sequence has completed.
    fn on_page_key(&mut self, key: KeyEvent, now_ms: u64) {
        match self.page {
            Page::Home => match key.code {
                KeyCode::Up => {
                    self.command_index = self.command_index.saturating_sub(1);
                }
                KeyCode::Down => {
                    self.command_index =
                        (self.command_index + 1).min(folio_content::COMMANDS.len() - 1);
                }
                KeyCode::Enter => self.run_command(now_ms),
                _ => {}
            },
            Page::About => {}
            Page::Skills => match key.code {
                KeyCode::Left => {
                    let len = folio_content::SKILL_CATEGORIES.len();
                    self.category_index = (self.category_index + len - 1) % len;
                }
                KeyCode::Right => {
                    self.category_index =
                        (self.category_index + 1) % folio_content::SKILL_CATEGORIES.len();
                }
                _ => {}
            },
            Page::Projects => self.on_projects_key(key),
            Page::Testimonials => match key.code {
                KeyCode::Left => {
                    let len = folio_content::TESTIMONIALS.len();
                    self.testimonial_index = (self.testimonial_index + len - 1) % len;
                    self.carousel_at_ms = now_ms;
                }
                KeyCode::Right => {
                    self.testimonial_index =
                        (self.testimonial_index + 1) % folio_content::TESTIMONIALS.len();
                    self.carousel_at_ms = now_ms;
                }
                _ => {}
            },
            Page::Contact => match key.code {
                KeyCode::Up => self.form.focus = self.form.focus.prev(),
                KeyCode::Down => self.form.focus = self.form.focus.next(),
                KeyCode::Enter => self.form.editing = true,
                KeyCode::Char('s') => {
                    if let Some(url) = self.form.submit(now_ms) {
                        self.pending_mailto = Some(url);
                    }
                }
                KeyCode::Char('c') => {
                    if clipboard::copy(folio_content::profile::EMAIL) {
                        self.email_copied.mark(now_ms);
                    }
                }
                KeyCode::Char('p') => {
                    if clipboard::copy(folio_content::profile::PHONE) {
                        self.phone_copied.mark(now_ms);
                    }
                }
                _ => {}
            },
        }
    }

    fn on_projects_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                self.project_filter = self.project_filter.prev();
                self.project_index = 0;
            }
            KeyCode::Right => {
                self.project_filter = self.project_filter.next();
                self.project_index = 0;
            }
            KeyCode::Up => self.project_index = self.project_index.saturating_sub(1),
            KeyCode::Down => {
                let len = pages::projects::filtered(self.project_filter).len();
                self.project_index = (self.project_index + 1).min(len.saturating_sub(1));
            }
            KeyCode::Char('o') => {
                if let Some(project) =
                    pages::projects::filtered(self.project_filter).get(self.project_index)
                {
                    open_external(project.live_url);
                }
            }
            KeyCode::Char('g') => {
                if let Some(url) = pages::projects::filtered(self.project_filter)
                    .get(self.project_index)
                    .and_then(|p| p.github_url)
                {
                    open_external(url);
                }
            }
            _ => {}
        }
    }

    /// Run the selected home-page command.
    fn run_command(&mut self, now_ms: u64) {
        let Some(command) = folio_content::COMMANDS.get(self.command_index) else {
            return;
        };
        match command.name {
            "portfolio" => {
                self.project_filter = ProjectFilter::Design;
                self.set_page(Page::Projects, now_ms);
            }
            "projects" => {
                self.project_filter = ProjectFilter::Dev;
                self.set_page(Page::Projects, now_ms);
            }
            "ui-kit" => self.set_page(Page::Skills, now_ms),
            "contact" => self.set_page(Page::Contact, now_ms),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
