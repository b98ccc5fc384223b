//! Entry point for the polltop TUI. Parses args, resolves the endpoint
//! profile, and runs the App.

use std::env;
use std::io::{self, Write};

use polltop::app::App;
use polltop::profiles::{
    load_profiles, save_profiles, ProfileEntry, ProfileRequest, ResolveProfile,
};

const DEFAULT_INTERVAL_SECS: u64 = 3;

struct ParsedArgs {
    url: Option<String>,
    interval_secs: Option<u64>,
    profile: Option<String>,
    save: bool,
    dry_run: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "polltop".into());
    let mut url: Option<String> = None;
    let mut interval_secs: Option<u64> = None;
    let mut profile: Option<String> = None;
    let mut save = false; // --save
    let mut dry_run = false; // --dry-run

    let usage = |prog: &str| {
        format!(
            "Usage: {prog} [--interval SECS|-i SECS] [--profile NAME|-P NAME] [--save] [--dry-run] [http://HOST:PORT/data]"
        )
    };

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Err(usage(&prog));
            }
            "--interval" | "-i" => {
                let v = it.next().ok_or_else(|| usage(&prog))?;
                interval_secs = Some(parse_interval(&v)?);
            }
            "--profile" | "-P" => {
                profile = it.next();
            }
            "--save" => {
                save = true;
            }
            "--dry-run" => {
                dry_run = true;
            }
            _ if arg.starts_with("--interval=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    interval_secs = Some(parse_interval(v)?);
                }
            }
            _ if arg.starts_with("--profile=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        profile = Some(v.to_string());
                    }
                }
            }
            _ => {
                if url.is_none() {
                    url = Some(arg);
                } else {
                    return Err(format!("Unexpected argument. {}", usage(&prog)));
                }
            }
        }
    }
    Ok(ParsedArgs {
        url,
        interval_secs,
        profile,
        save,
        dry_run,
    })
}

fn parse_interval(v: &str) -> Result<u64, String> {
    match v.trim().parse::<u64>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("invalid --interval '{v}': expected whole seconds >= 1")),
    }
}

fn check_url(u: &str) -> Result<(), String> {
    match url::Url::parse(u) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        Ok(parsed) => Err(format!("unsupported URL scheme '{}'", parsed.scheme())),
        Err(e) => Err(format!("invalid URL '{u}': {e}")),
    }
}

fn init_logging() {
    // The TUI owns the terminal, so logs only go to a file when asked for.
    let Some(path) = env::var_os("POLLTOP_LOG") else {
        return;
    };
    let file = match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("polltop: cannot open log file: {e}");
            return;
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("polltop=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    init_logging();

    let profiles_file = load_profiles();
    let req = ProfileRequest {
        profile_name: parsed.profile.clone(),
        url: parsed.url.clone(),
        interval_secs: parsed.interval_secs,
    };
    let resolved = req.resolve(&profiles_file);

    let mut profiles_mut = profiles_file.clone();
    let (url, interval_secs): (String, Option<u64>) = match resolved {
        ResolveProfile::Direct(u, secs) => {
            if let Some(name) = parsed.profile.as_ref() {
                let entry = ProfileEntry { url: u.clone(), interval_secs: secs };
                match profiles_mut.profiles.get(name) {
                    None => {
                        // New profile: auto-save immediately
                        profiles_mut.profiles.insert(name.clone(), entry);
                        let _ = save_profiles(&profiles_mut);
                    }
                    Some(existing) => {
                        if *existing != entry {
                            let overwrite = parsed.save
                                || prompt_yes_no(&format!(
                                    "Overwrite existing profile '{name}'? [y/N]: "
                                ));
                            if overwrite {
                                profiles_mut.profiles.insert(name.clone(), entry);
                                let _ = save_profiles(&profiles_mut);
                            }
                        }
                    }
                }
            }
            (u, secs)
        }
        ResolveProfile::Loaded(u, secs) => (u, parsed.interval_secs.or(secs)),
        ResolveProfile::PromptSelect(names) => {
            eprintln!("Select profile:");
            for (i, n) in names.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, n);
            }
            eprint!("Enter number (or blank to abort): ");
            let _ = io::stderr().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                return Ok(());
            }
            let Ok(idx) = line.trim().parse::<usize>() else {
                return Ok(());
            };
            if idx < 1 || idx > names.len() {
                return Ok(());
            }
            match profiles_mut.profiles.get(&names[idx - 1]) {
                Some(entry) => (entry.url.clone(), entry.interval_secs),
                None => return Ok(()),
            }
        }
        ResolveProfile::PromptCreate(name) => {
            eprintln!("Profile '{name}' does not exist yet.");
            let url = prompt_string("Enter URL (http://HOST:PORT/data): ")?;
            if url.trim().is_empty() {
                return Ok(());
            }
            let secs_line = prompt_string("Poll interval in seconds (blank for default): ")?;
            let secs = secs_line.trim().parse::<u64>().ok().filter(|&n| n >= 1);
            profiles_mut.profiles.insert(
                name.clone(),
                ProfileEntry { url: url.trim().to_string(), interval_secs: secs },
            );
            let _ = save_profiles(&profiles_mut);
            (url.trim().to_string(), secs)
        }
        ResolveProfile::None => {
            eprintln!("No URL provided and no profiles to select.");
            return Ok(());
        }
    };

    if let Err(msg) = check_url(&url) {
        eprintln!("{msg}");
        return Ok(());
    }

    if parsed.dry_run {
        return Ok(());
    }

    let mut app = App::new(interval_secs.unwrap_or(DEFAULT_INTERVAL_SECS));
    app.run(&url).await
}

fn prompt_yes_no(prompt: &str) -> bool {
    eprint!("{prompt}");
    let _ = io::stderr().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_ok() {
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

fn prompt_string(prompt: &str) -> io::Result<String> {
    eprint!("{prompt}");
    let _ = io::stderr().flush();
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
