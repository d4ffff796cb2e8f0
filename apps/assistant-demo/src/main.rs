//! Personal Assistant Demo Application
//!
//! Demonstrates end-to-end request processing:
//! Request → Intent Parsing → Web/Browser Actions → Phrase Analysis

use anyhow::Result;
use clap::Parser;
use rand::seq::SliceRandom;
use std::io::{self, Write};
use tracing::{debug, info, warn};

use phrase_sense::{
    extract, tokenize, NounChunker, PosTagger, TaggerBackendKind, DEFAULT_STRUCTURE,
};
use request_parser::{create_parser, init as init_request_parser, Intent, RequestParser};
use voice_io::{
    plugin::{new_speech_input, new_speech_output, SttBackendKind, TtsBackendKind},
    Error as VoiceError, Gender, ListenConfig, SpeakConfig, SpeechInput, SpeechOutput,
    VoiceProfile,
};
use web_actions::plugin::{
    new_encyclopedia_backend, new_opener_backend, new_search_backend, EncyclopediaBackendKind,
    OpenerBackendKind, SearchBackendKind,
};
use web_actions::{Encyclopedia, PageOpener, WebSearch};

const QUESTION_REMARKS: &[&str] = &[
    "Great question",
    "Interesting question",
    "Fascinating!",
    "Glad you asked!",
];

const WAITING_REQUEST: &str = "I am still waiting";

#[derive(Parser)]
#[command(name = "assistant-demo")]
#[command(about = "Voice/Text Personal Assistant Demo")]
struct Args {
    /// Voice mode: requests arrive via speech input, replies are spoken
    #[arg(long)]
    voice: bool,

    /// Interactive mode (read requests from stdin)
    #[arg(long)]
    interactive: bool,

    /// Process a single request and exit
    #[arg(long)]
    test_request: Option<String>,

    /// Basic mode: skip the phrase analysis pass on free-form requests
    #[arg(long)]
    basic: bool,

    /// Assistant language, e.g. en-us or en-gb
    #[arg(long, default_value = "en-us")]
    lang: String,

    /// Assistant voice gender: male or female
    #[arg(long, default_value = "female")]
    gender: String,
}

fn main() -> Result<()> {
    setup_tracing();

    let args = Args::parse();
    let session = uuid::Uuid::new_v4();

    info!(%session, "🎤 Starting Personal Assistant Demo");

    let profile = VoiceProfile::new(args.lang.clone(), parse_gender(&args.gender)?);
    if !profile.is_english() {
        warn!(language = %profile.language, "assistant only converses in English");
        return Ok(());
    }

    init_request_parser().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    phrase_sense::init()?;

    let mut assistant = Assistant::build(&profile, args.voice, args.basic)?;

    if let Some(request) = args.test_request {
        assistant.handle_request(&request)?;
    } else if args.voice {
        run_voice_session(&mut assistant, &profile)?;
    } else if args.interactive {
        run_interactive_session(&mut assistant)?;
    } else {
        run_demo_requests(&mut assistant)?;
    }

    info!("✅ Assistant demo completed");
    Ok(())
}

/// The assistant and its injected capabilities
struct Assistant {
    parser: RequestParser,
    tagger: Box<dyn PosTagger + Send>,
    search: Box<dyn WebSearch + Send>,
    encyclopedia: Box<dyn Encyclopedia + Send>,
    opener: Box<dyn PageOpener + Send>,
    voice: Option<Box<dyn SpeechOutput + Send>>,
    basic: bool,
}

impl Assistant {
    fn build(profile: &VoiceProfile, voice: bool, basic: bool) -> Result<Self> {
        let parser = create_parser().map_err(|e| anyhow::anyhow!(e.to_string()))?;
        let tagger = phrase_sense::new_tagger_backend(TaggerBackendKind::Lexicon)
            .map_err(anyhow::Error::msg)?;
        let search = new_search_backend(SearchBackendKind::Mock).map_err(anyhow::Error::msg)?;
        let encyclopedia = new_encyclopedia_backend(EncyclopediaBackendKind::Mock)
            .map_err(anyhow::Error::msg)?;
        let opener = new_opener_backend(OpenerBackendKind::Mock).map_err(anyhow::Error::msg)?;
        let voice = if voice {
            let cfg = SpeakConfig::new(profile.clone());
            Some(new_speech_output(TtsBackendKind::Mock, cfg).map_err(anyhow::Error::msg)?)
        } else {
            None
        };

        Ok(Self {
            parser,
            tagger,
            search,
            encyclopedia,
            opener,
            voice,
            basic,
        })
    }

    /// Deliver a reply: spoken when a voice is attached, printed always.
    fn reply(&mut self, message: &str) {
        if let Some(voice) = self.voice.as_mut() {
            if let Err(e) = voice.say(message) {
                warn!("speech output failed: {e}");
            }
        }
        println!("{message}");
    }

    fn handle_request(&mut self, request: &str) -> Result<()> {
        let parsed = self.parser.parse(request);
        info!(
            intent = ?parsed.intent,
            confidence = parsed.confidence,
            "parsed request"
        );

        match parsed.intent {
            Intent::WebSearch { query } => {
                self.reply("Of course! Right away");
                match self.search.search(&query) {
                    Ok(found) => self.reply(&format!("This is what I found: {found}")),
                    Err(e) => {
                        warn!("web search failed: {e}");
                        self.reply("Sorry, an error has occurred.");
                    }
                }
            }
            Intent::Encyclopedia { topic } => {
                self.reply("Searching wikipedia..");
                match self.encyclopedia.summary(&topic, 1) {
                    Ok(summary) => self.reply(&format!("According to wikipedia: {summary}")),
                    Err(e) => {
                        warn!("encyclopedia lookup failed: {e}");
                        self.reply("Sorry, an error has occurred.");
                    }
                }
            }
            Intent::OpenSite(site) => {
                self.reply("Sure, I'm on it");
                if let Err(e) = self.opener.open_new_tab(site.url()) {
                    warn!("could not open {}: {e}", site.name());
                    self.reply("Sorry, an error has occurred.");
                }
            }
            Intent::Question => {
                let remark = QUESTION_REMARKS
                    .choose(&mut rand::thread_rng())
                    .copied()
                    .unwrap_or("Good question");
                self.reply(remark);
                match self.search.search(&parsed.text) {
                    Ok(found) => self.reply(&format!("This is what I found: {found}")),
                    Err(e) => warn!("question search failed: {e}"),
                }
            }
            Intent::Describe => {
                if self.basic {
                    self.reply("I can open sites or search the web for you.");
                } else {
                    self.describe_pass(&parsed.text)?;
                }
            }
        }

        Ok(())
    }

    /// Free-form pass: tag each sentence, pull out the noun phrase, and search
    /// for the (dominant word, noun) pair the extractor reports.
    fn describe_pass(&mut self, request: &str) -> Result<()> {
        let chunker = NounChunker::new();

        for sentence in tokenize::sentences(request) {
            let tagged = self.tagger.tag(&sentence);

            for chunk in chunker.extract_chunks(&tagged) {
                debug!(phrase = %chunk.phrase(&tagged), "noun phrase");
            }

            let extraction = extract(&tagged, DEFAULT_STRUCTURE)?;
            if extraction.noun.is_empty() && extraction.dominant.is_empty() {
                continue;
            }

            self.reply(&format!(
                "Filtering results for {} {}",
                extraction.noun, extraction.dominant
            ));

            let refined = if extraction.noun.is_empty() || extraction.dominant.is_empty() {
                request.to_string()
            } else {
                format!("{} {}", extraction.dominant, extraction.noun)
            };
            match self.search.search(&refined) {
                Ok(found) => self.reply(&format!("This is what I found: {found}")),
                Err(e) => warn!("refined search failed: {e}"),
            }
        }

        Ok(())
    }
}

fn run_interactive_session(assistant: &mut Assistant) -> Result<()> {
    println!("Welcome to the assistant demo!");
    println!("Type requests and press Enter (or 'quit' to exit):");
    println!("Examples:");
    println!("  - 'search the internet for rust tutorials'");
    println!("  - 'do a wikipedia search for octopus'");
    println!("  - 'open youtube'");
    println!("  - 'the big big red car'");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("🎤 Request: ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let request = input.trim();

        if request.eq_ignore_ascii_case("quit") || request.eq_ignore_ascii_case("exit") {
            break;
        }

        if !request.is_empty() {
            assistant.handle_request(request)?;
            println!();
        }
    }

    Ok(())
}

fn run_voice_session(assistant: &mut Assistant, profile: &VoiceProfile) -> Result<()> {
    let listen_cfg = ListenConfig {
        language: Some(profile.language.clone()),
        ..ListenConfig::default()
    };
    let mut input =
        new_speech_input(SttBackendKind::Mock, listen_cfg).map_err(anyhow::Error::msg)?;

    assistant.reply("How can I help you today?");

    loop {
        match input.listen() {
            Ok(transcript) => {
                println!("🎤 Heard: {}", transcript.text);
                assistant.handle_request(&transcript.text)?;
            }
            Err(VoiceError::Unintelligible) => {
                println!("Sorry, I did not recognize the audio.");
                assistant.handle_request(WAITING_REQUEST)?;
                break;
            }
            Err(e) => {
                warn!("speech input failed: {e}");
                println!("Sorry, an error has occurred.");
                break;
            }
        }
    }

    Ok(())
}

fn run_demo_requests(assistant: &mut Assistant) -> Result<()> {
    let demo_requests = vec![
        "open youtube",
        "search the internet for rust programming",
        "do a wikipedia search for octopus",
        "what's the weather like?",
        "the big big red car",
    ];

    println!("🎤 Running assistant demo with {} requests", demo_requests.len());
    println!();

    for (i, request) in demo_requests.iter().enumerate() {
        println!("{}/{}: {}", i + 1, demo_requests.len(), request);
        assistant.handle_request(request)?;
        println!();
    }

    println!("🎉 Demo completed! All requests processed.");
    Ok(())
}

fn parse_gender(value: &str) -> Result<Gender> {
    match value.trim().to_lowercase().as_str() {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        other => anyhow::bail!("unknown gender: {other}"),
    }
}

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
