//! Integration tests for robots.txt documents
//!
//! These tests parse complete robots.txt files and check the public query surface
//! end-to-end: verdicts, matching lines, crawl delays, sitemaps and hosts.

use proptest::prelude::*;
use ripple_robots::{RobotsDocument, Verdict};
use std::sync::Arc;
use std::thread;

const BASE: &str = "http://www.example.com/robots.txt";

fn parse(lines: &[&str]) -> RobotsDocument {
    RobotsDocument::parse(BASE, Some(&lines.join("\n")))
}

fn assert_robots(robots: &RobotsDocument, allowed: &[&str], disallowed: &[&str]) {
    for path in allowed {
        let url = format!("http://www.example.com{}", path);
        assert_eq!(robots.is_allowed(&url, "*"), Verdict::Allowed, "{}", url);
    }
    for path in disallowed {
        let url = format!("http://www.example.com{}", path);
        assert_eq!(robots.is_allowed(&url, "*"), Verdict::Disallowed, "{}", url);
    }
}

#[test]
fn test_order_precedence_end_to_end() {
    let robots = parse(&[
        "User-agent: *",
        "Disallow: /fish*.php",
        "Allow: /fish/index.php",
        "Disallow: /test",
        "Allow: /test/",
    ]);

    assert_robots(
        &robots,
        &["/test/index.html", "/test/"],
        &[
            "/fish.php",
            "/fishheads/catfish.php?parameters",
            "/fish/index.php",
            "/test",
        ],
    );
}

#[test]
fn test_comments_and_invalid_lines() {
    let robots = parse(&[
        "#",
        "# This is a comment",
        "invalid line",
        "User-agent: *",
        "# This is a comment",
        "Disallow: /fish/ # ignore",
        ":::::another invalid line:::::",
        "# Disallow: fish",
        "Disallow: /test.html",
        "Unknown: rule",
    ]);

    assert_robots(
        &robots,
        &["/fish", "/Test.html"],
        &["/fish/index.php", "/fish/", "/test.html"],
    );
}

#[test]
fn test_leading_byte_order_mark() {
    let robots = RobotsDocument::parse(BASE, Some("\u{feff}User-agent: *\nDisallow: /private"));
    assert_robots(&robots, &["/public"], &["/private", "/private/page.html"]);
}

#[test]
fn test_escaped_pattern_characters_need_encoded_urls() {
    let robots = parse(&["User-agent: *", "Disallow: /a|b"]);
    assert_robots(&robots, &["/a|b"], &["/a%7Cb", "/a%7cb/c"]);
}

#[test]
fn test_rules_without_group_ignored() {
    let robots = parse(&["Disallow: /secret.html", "Disallow: /test"]);
    assert_robots(&robots, &["/secret.html", "/test/index.html", "/test/"], &[]);

    let robots = parse(&["User-agent:", "Disallow: /fish/", "Disallow: /test.html"]);
    assert_robots(&robots, &["/fish/", "/test.html"], &[]);
}

#[test]
fn test_unicode_and_encoded_paths() {
    let robots = parse(&[
        "User-agent: *",
        "Disallow: /%CF%80",
        "Disallow: /%e2%9d%83",
        "Disallow: /%a%a",
        "Disallow: /💩",
        "Disallow: /✼*t$",
        "Disallow: /%E2%9C%A4*t$",
        "Disallow: /✿%a",
        "Disallow: /http%3A%2F%2Fexample.org",
    ]);

    assert_robots(
        &robots,
        &[
            "/✼testing",
            "/%E2%9C%BCtesting",
            "/✤testing",
            "/%E2%9C%A4testing",
            "/http://example.org",
            "/http:%2F%2Fexample.org",
        ],
        &[
            "/%CF%80",
            "/%CF%80/index.html",
            "/π",
            "/π/index.html",
            "/%e2%9d%83",
            "/%E2%9D%83/index.html",
            "/❃",
            "/❃/index.html",
            "/%F0%9F%92%A9",
            "/%F0%9F%92%A9/index.html",
            "/💩",
            "/💩/index.html",
            "/%a%a",
            "/%a%a/index.html",
            "/✼test",
            "/%E2%9C%BCtest",
            "/✤test",
            "/%E2%9C%A4testt",
            "/✿%a",
            "/%E2%9C%BF%atest",
            "/http%3A%2F%2Fexample.org",
        ],
    );
}

#[test]
fn test_unicode_and_punycode_hosts() {
    let contents = "User-agent: *\nDisallow: /secret.html\nDisallow: /test";
    let hosts = [
        "http://www.münich.com",
        "http://www.xn--mnich-kva.com",
        "http://www.m%C3%BCnich.com",
    ];

    for base in hosts {
        let robots = RobotsDocument::parse(&format!("{}/robots.txt", base), Some(contents));
        for host in hosts {
            assert_eq!(
                robots.is_allowed(&format!("{}/index.html", host), "*"),
                Verdict::Allowed
            );
            assert_eq!(
                robots.is_allowed(&format!("{}/secret.html", host), "*"),
                Verdict::Disallowed
            );
        }
    }
}

#[test]
fn test_host_case_ignored() {
    let robots = RobotsDocument::parse(
        "http://www.eXample.com/robots.txt",
        Some("User-agent: *\nDisallow: /secret.html"),
    );
    for host in ["www.example.com", "www.ExAmPlE.com", "www.EXAMPLE.com"] {
        assert_eq!(
            robots.is_allowed(&format!("http://{}/secret.html", host), "*"),
            Verdict::Disallowed
        );
        assert_eq!(
            robots.is_allowed(&format!("http://{}/index.html", host), "*"),
            Verdict::Allowed
        );
    }
}

#[test]
fn test_matching_line_numbers() {
    let robots = parse(&[
        "",
        "User-agent: *",
        "",
        "Disallow: /fish/",
        "Disallow: /test.html",
        "Allow: /fish/test.html",
        "Allow: /test.html",
        "",
        "User-agent: a",
        "allow: /",
        "",
        "User-agent: b",
        "disallow: /test",
        "disallow: /t*t",
    ]);

    let line = |path: &str, agent: &str| {
        robots.matching_line_number(&format!("http://www.example.com{}", path), agent)
    };

    assert_eq!(line("/fish", "*"), Some(-1));
    assert_eq!(line("/fish/test.html", "*"), Some(6));
    assert_eq!(line("/Test.html", "*"), Some(-1));
    assert_eq!(line("/fish/index.php", "*"), Some(4));
    assert_eq!(line("/fish/", "*"), Some(4));
    assert_eq!(line("/test.html", "*"), Some(5));
    assert_eq!(line("/test.html", "a"), Some(10));
    assert_eq!(line("/test.html", "b"), Some(14));
    assert_eq!(line("/test.html", "unknown"), Some(5));
}

#[test]
fn test_crawl_delays() {
    let robots = parse(&[
        "user-agent: a",
        "crawl-delay: 1",
        "user-agent: b",
        "disallow: /d",
        "user-agent: c",
        "user-agent: d",
        "crawl-delay: 10",
    ]);

    assert_eq!(robots.crawl_delay("a"), Some(1.0));
    assert_eq!(robots.crawl_delay("b"), None);
    assert_eq!(robots.crawl_delay("c"), Some(10.0));
    assert_eq!(robots.crawl_delay("d"), Some(10.0));
    assert_eq!(robots.crawl_delay(""), None);
}

#[test]
fn test_invalid_crawl_delays() {
    let robots = parse(&[
        "user-agent: *",
        "crawl-delay: 3",
        "user-agent: a",
        "crawl-delay: 1.2.1",
        "user-agent: b",
        "crawl-delay: 1.a0",
        "user-agent: c",
        "user-agent: d",
        "crawl-delay: 10a",
    ]);

    for agent in ["a", "b", "c", "d"] {
        assert_eq!(robots.crawl_delay(agent), None, "{}", agent);
    }
    assert_eq!(robots.crawl_delay("e"), Some(3.0));
}

#[test]
fn test_sitemaps_in_order() {
    let robots = parse(&[
        "user-agent: a",
        "crawl-delay: 1",
        "sitemap: http://example.com/test.xml",
        "user-agent: b",
        "disallow: /d",
        "sitemap: /sitemap.xml",
        "sitemap:     http://example.com/test/sitemap.xml     ",
    ]);

    assert_eq!(
        robots.sitemaps(),
        vec![
            "http://example.com/test.xml",
            "/sitemap.xml",
            "http://example.com/test/sitemap.xml",
        ]
    );
}

#[test]
fn test_last_host_wins() {
    let robots = parse(&[
        "user-agent: a",
        "crawl-delay: 1",
        "host: www.example.net",
        "user-agent: b",
        "disallow: /d",
        "host: example.net",
        "host: Example.COM",
    ]);
    assert_eq!(robots.preferred_host(), Some("example.com"));

    let robots = parse(&["user-agent: a", "crawl-delay: 1"]);
    assert_eq!(robots.preferred_host(), None);
}

#[test]
fn test_empty_and_invalid_directives() {
    let robots = parse(&[
        "user-agent:",
        "user-agent:::: a::",
        "crawl-delay:",
        "crawl-delay:::: 0:",
        "host:",
        "host:: example.com",
        "sitemap:",
        "sitemap:: site:map.xml",
        "disallow:",
        "disallow::: /:",
        "allow:",
        "allow::: /:",
    ]);

    assert_eq!(
        robots.is_allowed("http://www.example.com/", "*"),
        Verdict::Allowed
    );
    assert_eq!(robots.preferred_host(), Some(": example.com"));
    assert_eq!(robots.sitemaps(), vec![": site:map.xml"]);
}

#[test]
fn test_empty_text() {
    for robots in [
        RobotsDocument::parse(BASE, Some("")),
        RobotsDocument::parse(BASE, None),
    ] {
        assert_robots(&robots, &["/secret.html", "/test/index.html", "/test/"], &[]);
        assert!(robots.sitemaps().is_empty());
        assert_eq!(robots.preferred_host(), None);
        assert_eq!(robots.crawl_delay("*"), None);
        assert_eq!(robots.crawl_delay("RippleBot/1.0"), None);
    }
}

#[test]
fn test_adversarial_wildcards_stay_fast() {
    let pattern = format!("/{}b$", "a*".repeat(40));
    let text = format!("User-agent: *\nDisallow: {}", pattern);
    let robots = RobotsDocument::parse(BASE, Some(&text));

    let url = format!("http://www.example.com/{}", "a".repeat(20_000));
    assert_eq!(robots.is_allowed(&url, "*"), Verdict::Allowed);

    let url = format!("http://www.example.com/{}b", "a".repeat(20_000));
    assert_eq!(robots.is_allowed(&url, "*"), Verdict::Disallowed);
}

#[test]
fn test_shared_across_threads() {
    let robots = Arc::new(parse(&["User-agent: *", "Disallow: /private"]));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let robots = Arc::clone(&robots);
            thread::spawn(move || {
                let url = format!("http://www.example.com/private/{}", i);
                robots.is_allowed(&url, "*")
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Verdict::Disallowed);
    }
}

proptest! {
    #[test]
    // the "x" keeps an escaped dot from forming a dot segment
    fn prop_percent_escape_case_irrelevant(bytes in prop::collection::vec(any::<u8>(), 1..6)) {
        let lower: String = bytes.iter().map(|b| format!("%{:02x}", b)).collect();
        let upper: String = bytes.iter().map(|b| format!("%{:02X}", b)).collect();

        let text = format!("User-agent: *\nDisallow: /p/x{}", lower);
        let robots = RobotsDocument::parse(BASE, Some(&text));
        let url = format!("http://www.example.com/p/x{}/rest", upper);
        prop_assert_eq!(robots.is_allowed(&url, "*"), Verdict::Disallowed);

        let text = format!("User-agent: *\nDisallow: /p/x{}*$", upper);
        let robots = RobotsDocument::parse(BASE, Some(&text));
        let url = format!("http://www.example.com/p/x{}", lower);
        prop_assert_eq!(robots.is_allowed(&url, "*"), Verdict::Disallowed);
    }

    #[test]
    fn prop_other_hosts_indeterminate(label in "[a-z]{1,12}", path in "/[a-z0-9/]{0,20}") {
        let robots = parse(&["User-agent: *", "Disallow: /"]);
        let url = format!("http://{}.example.org{}", label, path);
        prop_assert_eq!(robots.is_allowed(&url, "*"), Verdict::Indeterminate);
        prop_assert_eq!(robots.is_disallowed(&url, "*"), None);
    }

    #[test]
    fn prop_other_ports_indeterminate(port in 1u16.., path in "/[a-z0-9/]{0,20}") {
        prop_assume!(port != 80);
        let robots = parse(&["User-agent: *", "Disallow: /"]);
        let url = format!("http://www.example.com:{}{}", port, path);
        prop_assert_eq!(robots.is_allowed(&url, "*"), Verdict::Indeterminate);
    }
}
