use super::*;
use crate::config::{LinkConfig, LinkType};
use crate::params::Params;
use crate::path::{PathParts, To};
use crate::template::UrlOptions;

fn factory_with(config: LinkConfig) -> LinkFactory {
    LinkFactory::new(config).unwrap()
}

fn anchor(link: ResolvedLink) -> Anchor {
    match link {
        ResolvedLink::Anchor(anchor) => anchor,
        ResolvedLink::Router(router) => panic!("expected anchor, got router link to {:?}", router.to),
    }
}

fn router(link: ResolvedLink) -> RouterLink {
    match link {
        ResolvedLink::Router(router) => router,
        ResolvedLink::Anchor(anchor) => panic!("expected router link, got anchor {}", anchor.href),
    }
}

#[test]
fn test_external_detection() {
    let external = |s: &str| is_external_default(Some(&To::from(s)));
    assert!(external("https://example.com"));
    assert!(external("ftp://files"));
    assert!(external("mailto:team@example.com"));
    assert!(!external("mailto:nobody"));
    assert!(!external("/users"));
    assert!(!external(""));
    assert!(!is_external_default(Some(&To::from(PathParts::new("https://x")))));
}

#[test]
fn test_internal_in_router_context_is_router_link() {
    let factory = LinkFactory::default();
    let link = router(factory.resolve(LinkProps::to("/users"), true));
    assert_eq!(link.to, To::from("/users"));
    assert_eq!(link.target, None);
    assert_eq!(link.rel, None);
    assert_eq!(
        link.class_name.evaluate(NavState::default()),
        "panda-link panda-link-default"
    );
}

#[test]
fn test_router_link_ignores_basename() {
    let factory = factory_with(LinkConfig {
        basename: "/app".into(),
        ..LinkConfig::default()
    });
    let link = router(factory.resolve(LinkProps::to("/users"), true));
    assert_eq!(link.to.href(), "/users");
}

#[test]
fn test_outside_router_is_anchor_with_basename() {
    let factory = factory_with(LinkConfig {
        basename: "/app".into(),
        ..LinkConfig::default()
    });
    let a = anchor(factory.resolve(LinkProps::to("/users"), false));
    assert_eq!(a.href, "/app/users");
}

#[test]
fn test_external_is_blank_anchor_without_basename() {
    let factory = factory_with(LinkConfig {
        basename: "/app".into(),
        ..LinkConfig::default()
    });
    let a = anchor(factory.resolve(LinkProps::to("https://example.com"), true));
    assert_eq!(a.href, "https://example.com");
    assert_eq!(a.target, Some(BLANK_TARGET));
    assert_eq!(a.rel, Some(BLANK_REL));
}

#[test]
fn test_blank_internal_router_link() {
    let factory = LinkFactory::default();
    let props = LinkProps {
        blank: true,
        ..LinkProps::to("/users")
    };
    let link = router(factory.resolve(props, true));
    assert_eq!(link.target, Some("_blank"));
    assert_eq!(link.rel, Some("noopener noreferrer"));
}

#[test]
fn test_missing_or_empty_target_is_anchor() {
    let factory = LinkFactory::default();
    let a = anchor(factory.resolve(LinkProps::default(), true));
    assert_eq!(a.href, "");
    let a = anchor(factory.resolve(LinkProps::to(""), true));
    assert_eq!(a.href, "");
}

#[test]
fn test_structured_target_href() {
    let factory = LinkFactory::default();
    let to = PathParts::new("/users").search("page=2").hash("top");
    let a = anchor(factory.resolve(LinkProps::to(to), false));
    assert_eq!(a.href, "/users?page=2#top");
}

#[test]
fn test_class_name_composition() {
    let factory = factory_with(LinkConfig {
        prefix_cls: "nav".into(),
        default_link_type: LinkType::Text,
        ..LinkConfig::default()
    });
    let a = anchor(factory.resolve(LinkProps::to("/a").class_name("bold"), false));
    assert_eq!(a.class_name, "nav nav-text bold");

    let props = LinkProps {
        link_type: Some(LinkType::None),
        ..LinkProps::to("/a")
    };
    let a = anchor(factory.resolve(props, false));
    assert_eq!(a.class_name, "nav nav-none");
}

#[test]
fn test_derived_class_name() {
    let factory = LinkFactory::default();
    let class = ClassName::derived(|state| {
        if state.is_active {
            "active".to_string()
        } else {
            "idle".to_string()
        }
    });

    let props = LinkProps::to("/a").class_name(class);
    let link = router(factory.resolve(props.clone(), true));
    assert!(link.class_name.is_derived());
    let active = NavState {
        is_active: true,
        is_pending: false,
    };
    assert_eq!(
        link.class_name.evaluate(active),
        "panda-link panda-link-default active"
    );

    let a = anchor(factory.resolve(props, false));
    assert_eq!(a.class_name, "panda-link panda-link-default idle");
}

#[test]
fn test_derived_style_and_children_evaluated_for_anchor() {
    let factory = LinkFactory::default();
    let props = LinkProps {
        style: Some(Style::derived(|state| {
            format!("opacity: {}", if state.is_pending { "0.5" } else { "1" })
        })),
        children: Some(Children::derived(|state| {
            Node::Text(format!("pending={}", state.is_pending))
        })),
        ..LinkProps::to("/a")
    };
    let a = anchor(factory.resolve(props, false));
    assert_eq!(a.style.as_deref(), Some("opacity: 1"));
    assert_eq!(a.content, vec![Node::Text("pending=false".into())]);
}

#[test]
fn test_external_icon_rules() {
    let factory = factory_with(LinkConfig {
        external_icon: Some("<i class=\"ext\"></i>".into()),
        ..LinkConfig::default()
    });
    let icon = Node::Html("<i class=\"ext\"></i>".into());

    let a = anchor(factory.resolve(LinkProps::to("https://x.io").children("Docs"), false));
    assert_eq!(a.content, vec![Node::Text("Docs".into()), icon]);

    let props = LinkProps {
        disable_external_icon: true,
        ..LinkProps::to("https://x.io").children("Docs")
    };
    let a = anchor(factory.resolve(props, false));
    assert_eq!(a.content, vec![Node::Text("Docs".into())]);

    let a = anchor(factory.resolve(
        LinkProps::to("https://x.io").children(Node::Html("<b>Docs</b>".into())),
        false,
    ));
    assert_eq!(a.content, vec![Node::Html("<b>Docs</b>".into())]);

    let a = anchor(factory.resolve(LinkProps::to("/internal").children("Docs"), false));
    assert_eq!(a.content, vec![Node::Text("Docs".into())]);

    let a = anchor(factory.resolve(LinkProps::to("https://x.io"), false));
    assert!(a.content.is_empty());
}

#[test]
fn test_no_icon_configured() {
    let factory = LinkFactory::default();
    let a = anchor(factory.resolve(LinkProps::to("https://x.io").children("Docs"), false));
    assert_eq!(a.content, vec![Node::Text("Docs".into())]);
}

#[test]
fn test_custom_external_check() {
    let factory = LinkFactory::default().with_external_check(|to| {
        to.and_then(To::as_url)
            .is_some_and(|url| url.starts_with("/legacy"))
    });
    let a = anchor(factory.resolve(LinkProps::to("/legacy/page"), true));
    assert_eq!(a.target, Some(BLANK_TARGET));
    assert!(factory.resolve(LinkProps::to("https://x.io"), true).as_router().is_some());
}

#[test]
fn test_disabled_is_carried() {
    let factory = LinkFactory::default();
    let props = LinkProps {
        disabled: true,
        ..LinkProps::to("/a")
    };
    assert!(router(factory.resolve(props.clone(), true)).disabled);
    assert!(anchor(factory.resolve(props, false)).disabled);
}

#[test]
fn test_router_options_reach_router_link() {
    let factory = LinkFactory::default();
    let options = RouterOptions {
        replace: true,
        end: true,
        relative: Some(Relative::Path),
        state: Some(serde_json::json!({ "from": "list" })),
        ..RouterOptions::default()
    };
    let props = LinkProps {
        router: options.clone(),
        ..LinkProps::to("../detail")
    };
    let link = router(factory.resolve(props, true));
    assert_eq!(link.router, options);
}

#[test]
fn test_template_link_router_options_merge() {
    let initial = RouterOptions {
        replace: true,
        ..RouterOptions::default()
    };
    let link = LinkFactory::default()
        .create_link("/users/{userId}")
        .with_initial_props(TemplateLinkProps {
            router: Some(initial.clone()),
            ..TemplateLinkProps::default()
        });
    let params = Params::from([("userId", "7")]);

    let resolved = link.resolve(TemplateLinkProps::default(), &params, true);
    assert_eq!(router(resolved).router, initial);

    let per_call = RouterOptions {
        prevent_scroll_reset: true,
        ..RouterOptions::default()
    };
    let resolved = link.resolve(
        TemplateLinkProps {
            router: Some(per_call.clone()),
            ..TemplateLinkProps::default()
        },
        &params,
        true,
    );
    assert_eq!(router(resolved).router, per_call);
}

#[test]
fn test_anchor_html_escapes() {
    let factory = LinkFactory::default();
    let props = LinkProps {
        blank: true,
        disabled: true,
        style: Some("color: red".into()),
        ..LinkProps::to("/search?a=1&b=2").children("Tom & <Jerry>")
    };
    let html = anchor(factory.resolve(props, false)).to_html().unwrap();
    assert_eq!(
        html,
        "<a href=\"/search?a=1&#38;b=2\" class=\"panda-link panda-link-default\" \
         style=\"color: red\" target=\"_blank\" rel=\"noopener noreferrer\" \
         aria-disabled=\"true\">Tom &#38; &#60;Jerry&#62;</a>"
    );
}

#[test]
fn test_anchor_html_keeps_markup_nodes() {
    let a = Anchor {
        href: "https://x.io".into(),
        class_name: "c".into(),
        style: None,
        content: vec![Node::Text("Docs".into()), Node::Html("<i></i>".into())],
        target: None,
        rel: None,
        disabled: false,
    };
    assert_eq!(
        a.to_html().unwrap(),
        "<a href=\"https://x.io\" class=\"c\">Docs<i></i></a>"
    );
}

#[test]
fn test_template_link_to_url() {
    let factory = LinkFactory::default();
    let home = factory.create_link("/");
    assert_eq!(home.to_url(&Params::new(), &UrlOptions::default()), "/");

    let users = factory.create_link("/users?userId={userId}");
    assert_eq!(users.template(), "/users?userId={userId}");
    let params = Params::from([("userId", "dancerphil"), ("keyword", "dan")]);
    assert_eq!(
        users.to_url(&params, &UrlOptions::default()),
        "/users?keyword=dan&userId=dancerphil"
    );
}

#[test]
fn test_template_link_to_url_from_struct() {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct UserParams {
        user_id: u64,
        keyword: Option<&'static str>,
    }

    let link = LinkFactory::default().create_link("/users/{userId}");
    let url = link
        .to_url_from(
            &UserParams {
                user_id: 42,
                keyword: None,
            },
            &UrlOptions::default(),
        )
        .unwrap();
    assert_eq!(url, "/users/42");
}

#[test]
fn test_template_link_uses_factory_encoding() {
    let factory = factory_with(LinkConfig {
        encode_path_variable: true,
        encode_query_variable: false,
        ..LinkConfig::default()
    });
    let link = factory.create_link("/users/{userId}");
    let params = Params::from([("userId", "a/b"), ("q", "c/d")]);
    assert_eq!(
        link.to_url(&params, &UrlOptions::default()),
        "/users/a%2Fb?q=c/d"
    );
}

#[test]
fn test_template_link_resolve_merges_initial_props_and_params() {
    let factory = factory_with(LinkConfig {
        basename: "/app".into(),
        ..LinkConfig::default()
    });
    let link = factory
        .create_link("/orgs/{orgId}/users/{userId}")
        .with_initial_props(TemplateLinkProps {
            hash: Some("profile".into()),
            link_type: Some(LinkType::Text),
            children: Some("Profile".into()),
            ..TemplateLinkProps::default()
        })
        .with_initial_params(Params::from([("orgId", "acme"), ("tab", "info")]));

    let resolved = link.resolve(
        TemplateLinkProps {
            hash: Some("settings".into()),
            ..TemplateLinkProps::default()
        },
        &Params::from([("userId", "7"), ("tab", "security")]),
        false,
    );
    let a = anchor(resolved);
    assert_eq!(a.href, "/app/orgs/acme/users/7?tab=security#settings");
    assert_eq!(a.class_name, "panda-link panda-link-text");
    assert_eq!(a.content, vec![Node::Text("Profile".into())]);
}

#[test]
fn test_template_link_resolve_in_router_context() {
    let link = LinkFactory::default().create_link("/users/{userId}");
    let resolved = link.resolve(
        TemplateLinkProps::default(),
        &Params::from([("userId", "7")]),
        true,
    );
    assert_eq!(router(resolved).to, To::from("/users/7"));
}

#[test]
fn test_factory_rejects_invalid_interpolate() {
    let err = LinkFactory::new(LinkConfig {
        interpolate: "(".into(),
        ..LinkConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, crate::error::ConfigError::InvalidInterpolate { .. }));
}
