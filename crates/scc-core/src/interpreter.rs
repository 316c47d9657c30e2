use super::content::Profile;
use super::content::FEATURED_PROJECTS;
use super::content::SKILL_SUMMARY;
use super::terminal::OutputLine;
use super::terminal::TerminalEntry;
use super::terminal::TerminalOutput;
use super::terminal::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    About,
    Skills,
    Projects,
    Contact,
    Github,
    Linkedin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub summary: &'static str,
    pub command: Command,
}

pub const COMMANDS: [CommandSpec; 8] = [
    CommandSpec {
        name: "help",
        summary: "Show this help message",
        command: Command::Help,
    },
    CommandSpec {
        name: "clear",
        summary: "Clear the terminal",
        command: Command::Clear,
    },
    CommandSpec {
        name: "about",
        summary: "About the developer",
        command: Command::About,
    },
    CommandSpec {
        name: "skills",
        summary: "List developer skills",
        command: Command::Skills,
    },
    CommandSpec {
        name: "projects",
        summary: "List recent projects",
        command: Command::Projects,
    },
    CommandSpec {
        name: "contact",
        summary: "Show contact information",
        command: Command::Contact,
    },
    CommandSpec {
        name: "github",
        summary: "Open GitHub profile",
        command: Command::Github,
    },
    CommandSpec {
        name: "linkedin",
        summary: "Open LinkedIn profile",
        command: Command::Linkedin,
    },
];

pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

pub fn lookup(normalized: &str) -> Option<Command> {
    COMMANDS
        .iter()
        .find(|spec| spec.name == normalized)
        .map(|spec| spec.command)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Entry(TerminalEntry),
    Clear,
    OpenExternal { entry: TerminalEntry, url: String },
}

pub fn interpret(input: &str, profile: &Profile) -> CommandOutcome {
    let normalized = normalize(input);
    let Some(command) = lookup(&normalized) else {
        return CommandOutcome::Entry(TerminalEntry::error(not_found_message(&normalized)));
    };

    match command {
        Command::Help => CommandOutcome::Entry(TerminalEntry::output(help_block())),
        Command::Clear => CommandOutcome::Clear,
        Command::About => CommandOutcome::Entry(TerminalEntry::output(about_block(profile))),
        Command::Skills => CommandOutcome::Entry(TerminalEntry::output(skills_block())),
        Command::Projects => CommandOutcome::Entry(TerminalEntry::output(projects_block())),
        Command::Contact => CommandOutcome::Entry(TerminalEntry::output(contact_block(profile))),
        Command::Github => CommandOutcome::OpenExternal {
            entry: TerminalEntry::text("Opening GitHub profile..."),
            url: profile.github_url.clone(),
        },
        Command::Linkedin => CommandOutcome::OpenExternal {
            entry: TerminalEntry::text("Opening LinkedIn profile..."),
            url: profile.linkedin_url.clone(),
        },
    }
}

pub fn not_found_message(normalized: &str) -> String {
    format!("Command not found: {normalized}. Type 'help' for available commands.")
}

fn help_block() -> TerminalOutput {
    let mut lines = vec![OutputLine::plain("Available commands:")];
    lines.extend(COMMANDS.iter().map(|spec| {
        OutputLine::styled(spec.name, Tone::Accent).push(format!(" - {}", spec.summary), Tone::Plain)
    }));
    TerminalOutput::Block(lines)
}

fn about_block(profile: &Profile) -> TerminalOutput {
    let mut lines = vec![OutputLine::styled(
        format!("{} - {}", profile.name, profile.role),
        Tone::Heading,
    )];
    lines.extend(profile.bio.iter().map(OutputLine::plain));
    TerminalOutput::Block(lines)
}

fn skills_block() -> TerminalOutput {
    let mut lines = vec![OutputLine::styled("Technical Skills:", Tone::Heading)];
    lines.extend(SKILL_SUMMARY.iter().map(|(area, items)| {
        OutputLine::plain("• ")
            .push(format!("{area}:"), Tone::Accent)
            .push(format!(" {items}"), Tone::Plain)
    }));
    TerminalOutput::Block(lines)
}

fn projects_block() -> TerminalOutput {
    let mut lines = vec![
        OutputLine::styled("═══ FEATURED PROJECTS ═══", Tone::Heading),
        OutputLine::blank(),
    ];
    for project in &FEATURED_PROJECTS {
        lines.push(
            OutputLine::styled(format!("● {}", project.name), Tone::Heading)
                .push(format!(" [{}]", project.status.label()), Tone::Accent),
        );
        lines.push(OutputLine::plain(format!("  {}", project.summary)));
        lines.push(OutputLine::styled(
            format!("  Tech: {}", project.technologies.join(" • ")),
            Tone::Muted,
        ));
        lines.push(OutputLine::blank());
    }
    lines.push(OutputLine::styled(
        "→ All projects feature scalable architecture and modern development practices",
        Tone::Muted,
    ));
    lines.push(OutputLine::styled(
        "→ Type 'contact' for collaboration opportunities",
        Tone::Muted,
    ));
    TerminalOutput::Block(lines)
}

fn contact_block(profile: &Profile) -> TerminalOutput {
    let rows = [
        ("Email", profile.email.as_str()),
        ("Phone", profile.phone.as_str()),
        ("Location", profile.location.as_str()),
        ("GitHub", Profile::display_link(&profile.github_url)),
        ("LinkedIn", Profile::display_link(&profile.linkedin_url)),
    ];
    let mut lines = vec![OutputLine::styled("Contact Information:", Tone::Heading)];
    lines.extend(rows.iter().map(|(label, value)| {
        OutputLine::plain("• ")
            .push(format!("{label}:"), Tone::Accent)
            .push(format!(" {value}"), Tone::Plain)
    }));
    TerminalOutput::Block(lines)
}
