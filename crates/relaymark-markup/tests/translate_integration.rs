//! End-to-end translation tests.
//!
//! Drives the public [`Translator`] facade and the standalone passes the
//! way an event handler would: one context per thread, one translator
//! shared between calls.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use relaymark_markup::{CachingResolver, Translator, emoji, shorten};
use relaymark_types::{
    ConversionContext, Dialect, DialectPair, Identity, IdentityResolver, MarkupText,
    ResolveError, SourceHost, StaticResolver,
};

fn slack_identity(id: &str) -> Identity {
    Identity {
        mention_token: format!("<@{id}>"),
        profile_url: format!("https://acme.slack.com/team/{id}"),
        display_name: None,
    }
}

fn host_identity(login: &str) -> Identity {
    Identity {
        mention_token: format!("@{login}"),
        profile_url: format!("https://github.com/{login}"),
        display_name: None,
    }
}

fn translator() -> Translator {
    Translator::with_resolver(
        StaticResolver::new()
            .with(Dialect::Slack, "octocat", slack_identity("U1"))
            .with(Dialect::GitHub, "U1", host_identity("octocat"))
            .with(Dialect::GitLab, "U1", host_identity("octo")),
    )
}

fn github_ctx() -> ConversionContext {
    ConversionContext::new(DialectPair::GitHubToSlack)
        .with_thread_url("https://hosta.example/org/repo/pull/9")
}

// ── 1. Emoji idempotence and round trips ────────────────────────────────

const EMOJI_SAMPLES: &[&str] = &[
    ":thinking: :hugs: :man_facepalming: :woman_facepalming: :facepalm:",
    ":thinking_face: :face_palm: :wave::skin-tone-4: :+1: :-1:",
    ":thumbsup_tone2: :slight_smile: :slightly_smiling_face: :rofl:",
    "times 10:30:45 and a::b :: :unknown:",
];

#[test]
fn every_emoji_direction_is_idempotent() {
    for pair in DialectPair::ALL {
        for sample in EMOJI_SAMPLES {
            let once = emoji::convert(pair, sample);
            let twice = emoji::convert(pair, &once);
            assert_eq!(twice, once, "{pair} is not idempotent on {sample:?}");
        }
    }
}

#[test]
fn two_way_emoji_round_trip() {
    for host in [SourceHost::GitHub, SourceHost::GitLab] {
        let original = ":thinking: :robot: :rofl:";
        let chat = emoji::narrow(host, original);
        assert_ne!(chat, original);
        assert_eq!(emoji::widen(host, &chat), original);
    }
}

#[test]
fn facepalm_collapse_is_stable_but_not_invertible() {
    let narrowed = emoji::narrow(SourceHost::GitHub, ":man_facepalming:");
    assert_eq!(narrowed, emoji::narrow(SourceHost::GitHub, ":woman_facepalming:"));
    assert_eq!(narrowed, ":face_palm:");
    let first = emoji::widen(SourceHost::GitHub, &narrowed);
    for _ in 0..3 {
        assert_eq!(emoji::widen(SourceHost::GitHub, &narrowed), first);
    }
    assert_eq!(first, ":facepalm:");
}

// ── 2. Style round trips ────────────────────────────────────────────────

#[test]
fn style_markers_round_trip_through_chat() {
    let t = translator();
    let to_chat = ConversionContext::new(DialectPair::GitHubToSlack);
    let from_chat = ConversionContext::new(DialectPair::SlackToGitHub);

    let markdown = "**b** _i_ ~~s~~";
    let chat = t.github_to_slack(markdown, &to_chat);
    assert_eq!(chat, "*b* _i_ ~s~");
    assert_eq!(t.slack_to_github(&chat, &from_chat), markdown);

    let chat = "*b* _i_ ~s~";
    let markdown = t.slack_to_gitlab(chat, &ConversionContext::new(DialectPair::SlackToGitLab));
    assert_eq!(
        t.gitlab_to_slack(&markdown, &ConversionContext::new(DialectPair::GitLabToSlack)),
        chat
    );
}

#[test]
fn nesting_direction_does_not_matter() {
    let t = translator();
    let ctx = ConversionContext::new(DialectPair::GitHubToSlack);
    let a = t.github_to_slack("**_x_**", &ctx);
    let b = t.github_to_slack("_**x**_", &ctx);
    let c = t.github_to_slack("***x***", &ctx);
    assert_eq!(a, "*_x_*");
    assert_eq!(a, b);
    assert_eq!(a, c);
}

// ── 3. Lists ────────────────────────────────────────────────────────────

#[test]
fn two_level_list_uses_fixed_markers() {
    let out = translator().github_to_slack("- 1\n  - 2\n- 3", &github_ctx());
    assert_eq!(out, "• 1\n    ◦ 2\n• 3");
}

#[test]
fn three_level_list_passes_through() {
    let input = "- 1\n  - 2\n    - 3";
    assert_eq!(translator().github_to_slack(input, &github_ctx()), input);
}

#[test]
fn star_bullets_are_not_italic() {
    let out = translator().github_to_slack("* one\n* *two*", &github_ctx());
    assert_eq!(out, "• one\n• _two_");
}

// ── 4. Titles ───────────────────────────────────────────────────────────

#[test]
fn title_tracker_id_with_default_prefix() {
    let ctx = github_ctx().with_tracker_url("default", "https://x/browse/");
    assert_eq!(
        translator().linkify_title("PROJ-1: fix", &ctx),
        "<https://x/browse/PROJ-1|PROJ-1>: fix"
    );
}

#[test]
fn title_repeated_id_wrapped_at_each_occurrence() {
    let ctx = github_ctx().with_tracker_url("default", "https://x/browse/");
    let out = translator().linkify_title("PROJ-1 again PROJ-1", &ctx);
    assert_eq!(out.matches("<https://x/browse/PROJ-1|PROJ-1>").count(), 2);
    assert!(!out.contains("<<"));
}

#[test]
fn title_reference_scoped_to_thread_owner() {
    let out = translator().linkify_title("other#5", &github_ctx());
    assert_eq!(out, "<https://hosta.example/org/other/pull/5|other#5>");
}

// ── 5. Length budget ────────────────────────────────────────────────────

#[test]
fn under_budget_message_is_byte_identical() {
    let long = format!("https://hosta.example/{}", "x".repeat(500));
    let text = format!("<{long}|one> and <{long}|two>");
    assert_eq!(shorten::shorten_links(&text, 4000, "https://short"), text);
}

#[test]
fn over_budget_message_collapses_every_link() {
    let long = format!("https://hosta.example/{}", "x".repeat(500));
    let text = format!("<{long}|one> and <https://a.b|two>");
    assert_eq!(
        shorten::shorten_links(&text, 100, "https://short"),
        "<https://short|one> and <https://short|two>"
    );
}

// ── 6. Mentions ─────────────────────────────────────────────────────────

struct Counting {
    calls: AtomicUsize,
}

impl IdentityResolver for Counting {
    fn resolve(
        &self,
        _platform: Dialect,
        identifier: &str,
    ) -> Result<Option<Identity>, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if identifier == "down" {
            return Err(ResolveError::Timeout {
                identifier: identifier.to_owned(),
            });
        }
        Ok(Some(slack_identity(&identifier.to_uppercase())))
    }
}

#[test]
fn mentions_resolved_once_per_identifier() {
    let counting = Arc::new(Counting {
        calls: AtomicUsize::new(0),
    });
    let t = Translator::new(counting.clone());
    let out = t.github_to_slack("@ann @bob @ann @ann/core @down", &github_ctx());
    assert_eq!(
        out,
        "<@ANN> <@BOB> <@ANN> <https://hosta.example/orgs/ann/teams/core|@ann/core> \
         <https://hosta.example/down|@down>"
    );
    assert_eq!(counting.calls.load(Ordering::SeqCst), 3);
}

#[test]
fn chat_mentions_back_to_each_host() {
    let t = translator();
    let gh = ConversionContext::new(DialectPair::SlackToGitHub);
    let gl = ConversionContext::new(DialectPair::SlackToGitLab);
    assert_eq!(t.slack_to_github("cc <@U1>", &gh), "cc @octocat");
    assert_eq!(t.slack_to_gitlab("cc <@U1>", &gl), "cc @octo");
}

#[test]
fn caching_resolver_shared_between_threads() {
    let counting = Counting {
        calls: AtomicUsize::new(0),
    };
    let cache = Arc::new(CachingResolver::new(counting));
    let t = Translator::new(cache.clone());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let t = t.clone();
            thread::spawn(move || t.github_to_slack("hi @ann", &github_ctx()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "hi <@ANN>");
    }
    assert_eq!(cache.len(), 1);
    let after = cache.inner().calls.load(Ordering::SeqCst);
    t.github_to_slack("hi @ann", &github_ctx());
    assert_eq!(cache.inner().calls.load(Ordering::SeqCst), after);
}

// ── 7. Permissiveness ───────────────────────────────────────────────────

#[test]
fn plain_text_is_unchanged_in_every_direction() {
    let t = translator();
    let text = "Nothing special here, just words and 3 numbers.";
    for pair in DialectPair::ALL {
        let ctx = ConversionContext::new(pair);
        assert_eq!(t.translate_pair(pair, text, &ctx), text, "{pair}");
    }
}

#[test]
fn partial_syntax_passes_through() {
    let t = translator();
    let ctx = github_ctx();
    for input in ["**open", "[text](", "~~ half", "@", "#", "`tick", "![alt]"] {
        assert_eq!(t.github_to_slack(input, &ctx), input);
    }
}

#[test]
fn generic_translate_tags_the_result() {
    let t = translator();
    let text = MarkupText::new(Dialect::Slack, "*hi*");
    let out = t.translate(&text, Dialect::GitLab, &ConversionContext::new(DialectPair::SlackToGitLab));
    assert_eq!(out.dialect(), Dialect::GitLab);
    assert_eq!(out.as_str(), "**hi**");
}
