use std::rc::Rc;

use chrono::Datelike;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::category::{Category, CategorySelector, Select};
use crate::components::category_tabs::CategoryTabs;
use crate::components::stat_bar::StatBar;
use crate::config;
use crate::content::{Catalog, Discipline};
use crate::hooks::{use_region_reveal, RegionRefs};
use crate::reveal::{RegionId, Regions};

fn region_class(regions: &Regions, id: RegionId, extra: Classes) -> Classes {
    classes!("reveal", extra, regions.is_revealed(id).then(|| "is-visible"))
}

#[function_component(Infographic)]
pub fn infographic() -> Html {
    let catalog = use_context::<Rc<Catalog>>();
    let refs = use_memo(|_| RegionRefs::default(), ());
    let regions = use_region_reveal(refs.clone());
    let selector = use_reducer_eq(CategorySelector::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_select = {
        let selector = selector.clone();
        Callback::from(move |category: Category| selector.dispatch(Select(category)))
    };

    let scroll_to_distinction = {
        let target = refs.get(RegionId::Distinction);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(section) = target.cast::<Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    };

    let Some(catalog) = catalog else {
        log::error!("Infographic rendered without a content catalog");
        return html! {};
    };

    let category = selector.current();
    let bundle = catalog.bundle(category);
    let year = chrono::Local::now().year();

    html! {
        <div class="infographic">
            <header class="hero">
                <div class="hero__glow"></div>
                <div class="hero__content">
                    <div class="hero__eyebrow">
                        <div class="hero__rule"></div>
                        <span>{"Allied Health & Performance"}</span>
                        <div class="hero__rule"></div>
                    </div>
                    <h1 class="hero__title">
                        {"PRJCT:"}<br />
                        <span class="hero__title-accent">{"LEGACY"}</span>
                    </h1>
                    <p class="hero__lead">
                        {"Bridging the gap between clinical rehabilitation and high-performance athletics."}
                        <span class="hero__promise">
                            {"I don’t just get you back on track, "}
                            <span class="accent">{"I build bodies that last."}</span>
                        </span>
                    </p>
                    <div class="hero__actions">
                        <button class="button button--primary" onclick={scroll_to_distinction}>
                            {"The Difference"}
                        </button>
                        <a class="button button--outline" href={config::BOOKING_URL} target="_blank" rel="noopener noreferrer">
                            {"Book Consultation"}
                        </a>
                    </div>
                </div>
            </header>

            <section
                id={RegionId::Distinction.as_str()}
                ref={refs.get(RegionId::Distinction)}
                class={region_class(&regions, RegionId::Distinction, classes!("distinction"))}
            >
                <div class="section-inner">
                    <div class="section-intro">
                        <h2>{"Physio vs. "}<span class="accent">{"Physiology"}</span></h2>
                        <div class="section-intro__rule"></div>
                        <p>
                            {"Many confuse Exercise Physiology (EP) with Physiotherapy. While we work together, our roles are distinct."}
                            <br /><br />
                            <span class="highlight">
                                {"Think of Physio as the \"Mechanic\" fixing the acute breakdown, and EP as the \"Engineer\" optimizing the machine for the long haul."}
                            </span>
                        </p>
                    </div>
                    <div class="distinction__grid">
                        { discipline_card(&catalog.distinction.physio, false) }
                        { discipline_card(&catalog.distinction.physiology, true) }
                    </div>
                </div>
            </section>

            <section
                id={RegionId::Data.as_str()}
                ref={refs.get(RegionId::Data)}
                class={region_class(&regions, RegionId::Data, classes!("data", "section-inner"))}
            >
                <div class="data__grid">
                    <div class="data__intro">
                        <h2>{"The Spectrum of "}<span class="accent">{"Care"}</span></h2>
                        <p>
                            {"PRJCT: Legacy operates across the entire health continuum. Whether managing a heart condition or preparing for a national championship, the principles of physiology remain the same."}
                        </p>
                        <CategoryTabs current={category} on_select={on_select} />
                    </div>
                    <div class="data__panel">
                        <div class="data__panel-header">
                            <h3>{bundle.title.clone()}</h3>
                            <span class="data__tag">{bundle.tag.clone()}</span>
                        </div>
                        {
                            bundle.metrics.iter().enumerate().map(|(i, metric)| html! {
                                // Keyed per category so switching back remounts a fresh bar.
                                <StatBar key={format!("{}-{}", category.slug(), i)} metric={metric.clone()} />
                            }).collect::<Html>()
                        }
                        {
                            if bundle.pathways().is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <div class="pathways">
                                        <p class="pathways__heading">{"Pathways"}</p>
                                        <div class="pathways__grid">
                                            { for bundle.pathways().iter().map(|pathway| html! {
                                                <div class="pathways__item">{pathway.clone()}</div>
                                            }) }
                                        </div>
                                    </div>
                                }
                            }
                        }
                    </div>
                </div>
            </section>

            <section
                id={RegionId::Protocol.as_str()}
                ref={refs.get(RegionId::Protocol)}
                class={region_class(&regions, RegionId::Protocol, classes!("protocol", "section-inner"))}
            >
                <div class="section-intro">
                    <h2>{"The Legacy "}<span class="accent">{"Protocol"}</span></h2>
                    <p>{"Our four-stage methodology designed to take any individual from baseline to peak performance."}</p>
                </div>
                <div class="protocol__grid">
                    { for catalog.protocol.iter().map(|step| html! {
                        <div class="protocol__step" key={step.step.clone()}>
                            <div class="protocol__number">{step.step.clone()}</div>
                            <h4>{step.title.clone()}</h4>
                            <p>{step.description.clone()}</p>
                        </div>
                    }) }
                </div>
            </section>

            <footer
                id={RegionId::Contact.as_str()}
                ref={refs.get(RegionId::Contact)}
                class={region_class(&regions, RegionId::Contact, classes!("contact"))}
            >
                <div class="contact__inner">
                    <h2 class="contact__title">
                        {"Ready to build your"}<br />
                        <span class="accent">{"Legacy?"}</span>
                    </h2>
                    <div class="contact__cards">
                        <a class="contact__card" href={config::mailto(config::REFERRALS_EMAIL)}>
                            <h4>{"Referrals"}</h4>
                            <p>{"Clinical pathways for GPs & Physios"}</p>
                        </a>
                        <a class="contact__card" href={config::BOOKING_URL} target="_blank" rel="noopener noreferrer">
                            <h4>{"Consultations"}</h4>
                            <p>{"Book Initial Assessment"}</p>
                        </a>
                    </div>
                    <div class="contact__bottom">
                        <p>{format!("© {} PRJCT: Legacy.", year)}</p>
                        <div class="contact__links">
                            <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                            <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                            <a href={config::mailto(config::INFO_EMAIL)}>{"Email"}</a>
                        </div>
                    </div>
                </div>
            </footer>

            <style>
                { infographic_css() }
            </style>
        </div>
    }
}

fn discipline_card(discipline: &Discipline, featured: bool) -> Html {
    let marker = if featured { "✓" } else { "•" };
    html! {
        <div class={classes!("discipline", featured.then(|| "discipline--featured"))}>
            <div class="discipline__header">
                <div class="discipline__icon">{ if featured { "⚡" } else { "◷" } }</div>
                <div>
                    <h3>{discipline.name.clone()}</h3>
                    <span class="discipline__focus">{discipline.focus.clone()}</span>
                </div>
            </div>
            <ul class="discipline__points">
                { for discipline.points.iter().map(|point| html! {
                    <li><span class="discipline__marker">{marker}</span><span>{point.clone()}</span></li>
                }) }
                <li class="discipline__goal">
                    <span class="discipline__marker">{marker}</span>
                    <span>{discipline.goal.clone()}</span>
                </li>
            </ul>
        </div>
    }
}

fn infographic_css() -> String {
    format!(
        r#"
        .infographic {{
            min-height: 100vh;
            background: #0E0E0E;
            color: #ffffff;
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            overflow-x: hidden;
        }}
        .infographic ::selection {{
            background: #6A1E2B;
            color: #ffffff;
        }}
        .accent {{
            color: #6A1E2B;
        }}

        .reveal {{
            opacity: 0;
            transform: translateY(2.5rem);
            transition: opacity {reveal}ms ease, transform {reveal}ms ease;
        }}
        .reveal.is-visible {{
            opacity: 1;
            transform: translateY(0);
        }}

        .hero {{
            position: relative;
            min-height: 85vh;
            display: flex;
            align-items: center;
            justify-content: center;
            overflow: hidden;
            border-bottom: 1px solid #222;
        }}
        .hero__glow {{
            position: absolute;
            top: 0;
            right: 50%;
            width: 60vw;
            height: 60vw;
            background: #6A1E2B;
            border-radius: 50%;
            filter: blur(180px);
            opacity: 0.1;
            transform: translate(50%, -50%);
        }}
        .hero__content {{
            position: relative;
            z-index: 1;
            max-width: 64rem;
            padding: 0 1.5rem;
            text-align: center;
            display: flex;
            flex-direction: column;
            align-items: center;
            animation: heroIn 1s ease-out;
        }}
        @keyframes heroIn {{
            from {{ opacity: 0; transform: translateY(2rem); }}
            to {{ opacity: 1; transform: translateY(0); }}
        }}
        .hero__eyebrow {{
            display: flex;
            align-items: center;
            gap: 1rem;
            margin-bottom: 2rem;
            color: #B0B0B0;
            letter-spacing: 0.3em;
            text-transform: uppercase;
            font-size: 0.8rem;
            font-weight: 600;
        }}
        .hero__rule {{
            height: 1px;
            width: 3rem;
            background: #6A1E2B;
        }}
        .hero__title {{
            font-size: clamp(4.5rem, 12vw, 8rem);
            font-weight: 900;
            letter-spacing: -0.05em;
            line-height: 0.9;
            margin: 0 0 2rem;
        }}
        .hero__title-accent {{
            background: linear-gradient(90deg, #ffffff, #B0B0B0);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }}
        .hero__lead {{
            font-size: 1.4rem;
            color: #B0B0B0;
            max-width: 42rem;
            line-height: 1.6;
            margin: 0 auto 2.5rem;
        }}
        .hero__promise {{
            display: block;
            margin-top: 1rem;
            color: #ffffff;
            font-weight: 700;
        }}
        .hero__actions {{
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
            justify-content: center;
        }}
        .button {{
            padding: 1rem 2.5rem;
            border-radius: 4px;
            font-weight: 700;
            font-size: 0.875rem;
            text-transform: uppercase;
            letter-spacing: 0.05em;
            text-decoration: none;
            cursor: pointer;
            transition: background 0.3s ease, color 0.3s ease;
        }}
        .button--primary {{
            background: #6A1E2B;
            color: #ffffff;
            border: none;
        }}
        .button--primary:hover {{
            background: rgba(106, 30, 43, 0.8);
        }}
        .button--outline {{
            background: #1a1a1a;
            color: #ffffff;
            border: 1px solid #333;
        }}
        .button--outline:hover {{
            background: #ffffff;
            color: #000000;
        }}

        .section-inner {{
            width: 100%;
            max-width: 80rem;
            margin: 0 auto;
            padding: 8rem 3rem;
            box-sizing: border-box;
        }}
        .section-intro {{
            text-align: center;
            max-width: 48rem;
            margin: 0 auto 5rem;
        }}
        .section-intro h2 {{
            font-size: 3rem;
            font-weight: 700;
            margin-bottom: 1.5rem;
        }}
        .section-intro p {{
            color: #B0B0B0;
            font-size: 1.125rem;
            line-height: 1.7;
        }}
        .section-intro__rule {{
            height: 4px;
            width: 5rem;
            background: #222;
            margin: 0 auto 1.5rem;
        }}
        .highlight {{
            color: #ffffff;
            font-weight: 500;
        }}

        .distinction {{
            background: #0a0a0a;
            border-bottom: 1px solid #222;
        }}
        .distinction__grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
            gap: 4rem;
        }}
        .discipline {{
            position: relative;
            overflow: hidden;
            padding: 2.5rem;
            border-radius: 1rem;
            border: 1px solid #333;
            background: #111;
            transition: border-color 0.3s ease;
        }}
        .discipline:hover {{
            border-color: #444;
        }}
        .discipline--featured {{
            border-color: rgba(106, 30, 43, 0.5);
            background: linear-gradient(180deg, #1a0508, #0e0e0e);
        }}
        .discipline__header {{
            display: flex;
            align-items: center;
            gap: 1.25rem;
            margin-bottom: 2rem;
            padding-bottom: 2rem;
            border-bottom: 1px solid #222;
        }}
        .discipline__header h3 {{
            font-size: 1.9rem;
            margin: 0;
        }}
        .discipline__icon {{
            padding: 1rem;
            border-radius: 0.75rem;
            background: #222;
            color: #B0B0B0;
            font-size: 1.5rem;
        }}
        .discipline--featured .discipline__icon {{
            background: #6A1E2B;
            color: #ffffff;
        }}
        .discipline__focus {{
            font-size: 0.875rem;
            color: #B0B0B0;
            text-transform: uppercase;
            letter-spacing: 0.1em;
        }}
        .discipline__points {{
            list-style: none;
            padding: 0;
            margin: 0;
        }}
        .discipline__points li {{
            display: flex;
            gap: 1rem;
            margin-bottom: 1.25rem;
            font-size: 1.125rem;
            color: #B0B0B0;
        }}
        .discipline--featured .discipline__points li {{
            color: rgba(255, 255, 255, 0.9);
        }}
        .discipline--featured .discipline__marker {{
            color: #6A1E2B;
        }}
        .discipline__points li.discipline__goal {{
            color: #ffffff;
            font-weight: 700;
        }}

        .data__grid {{
            display: grid;
            grid-template-columns: 5fr 7fr;
            gap: 4rem;
        }}
        .data__intro {{
            display: flex;
            flex-direction: column;
            justify-content: center;
        }}
        .data__intro h2 {{
            font-size: 2.5rem;
            margin-bottom: 1.5rem;
        }}
        .data__intro p {{
            color: #B0B0B0;
            font-size: 1.125rem;
            margin-bottom: 2.5rem;
        }}
        .category-tabs {{
            display: flex;
            flex-direction: column;
            gap: 0.75rem;
        }}
        .category-tab {{
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 1.5rem;
            border-radius: 0.75rem;
            border: 1px solid transparent;
            background: #111;
            color: #666;
            font-size: 1.25rem;
            font-weight: 700;
            text-align: left;
            cursor: pointer;
            transition: all 0.3s ease;
        }}
        .category-tab:hover {{
            color: #ffffff;
            background: #1a1a1a;
        }}
        .category-tab.active {{
            border-color: #6A1E2B;
            background: rgba(106, 30, 43, 0.1);
            color: #ffffff;
        }}
        .category-tab__name {{
            display: flex;
            align-items: center;
            gap: 1rem;
        }}
        .category-tab__chevron {{
            opacity: 0;
            transition: opacity 0.3s ease;
        }}
        .category-tab.active .category-tab__chevron {{
            opacity: 1;
        }}
        .data__panel {{
            background: #111;
            padding: 2.5rem;
            border-radius: 1rem;
            border: 1px solid #222;
            min-height: 500px;
            display: flex;
            flex-direction: column;
            justify-content: center;
        }}
        .data__panel-header {{
            display: flex;
            justify-content: space-between;
            align-items: flex-end;
            margin-bottom: 2.5rem;
            padding-bottom: 1.5rem;
            border-bottom: 1px solid #222;
        }}
        .data__panel-header h3 {{
            font-size: 1.9rem;
            margin: 0;
        }}
        .data__tag {{
            color: #6A1E2B;
            font-family: monospace;
            font-size: 0.875rem;
            letter-spacing: 0.05em;
        }}
        .stat-bar {{
            margin-bottom: 2rem;
        }}
        .stat-bar__header {{
            display: flex;
            justify-content: space-between;
            margin-bottom: 0.75rem;
        }}
        .stat-bar__label {{
            font-weight: 700;
            font-size: 1.125rem;
        }}
        .stat-bar__value {{
            color: #B0B0B0;
            font-family: monospace;
        }}
        .stat-bar__track {{
            width: 100%;
            height: 0.75rem;
            margin-bottom: 0.75rem;
            background: #1a1a1a;
            border: 1px solid #222;
            border-radius: 9999px;
            overflow: hidden;
        }}
        .stat-bar__fill {{
            height: 100%;
            border-radius: 9999px;
            background: #6A1E2B;
        }}
        .stat-bar__description {{
            font-size: 0.875rem;
            font-style: italic;
            color: rgba(176, 176, 176, 0.7);
        }}
        .pathways {{
            margin-top: 2.5rem;
            padding-top: 1.5rem;
            border-top: 1px solid #222;
        }}
        .pathways__heading {{
            font-size: 0.875rem;
            text-transform: uppercase;
            letter-spacing: 0.1em;
            color: #555;
            font-weight: 700;
            margin-bottom: 1rem;
        }}
        .pathways__grid {{
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 1rem;
        }}
        .pathways__item {{
            background: #1a1a1a;
            padding: 1rem;
            border-radius: 0.5rem;
            border: 1px solid #333;
            color: #B0B0B0;
            text-align: center;
            font-size: 0.875rem;
            transition: border-color 0.3s ease;
        }}
        .pathways__item:hover {{
            border-color: #6A1E2B;
        }}

        .protocol__grid {{
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 1.5rem;
        }}
        .protocol__step {{
            padding: 2rem;
            border-radius: 0.75rem;
            background: #111;
            border: 1px solid #222;
            transition: border-color 0.3s ease;
        }}
        .protocol__step:hover {{
            border-color: rgba(106, 30, 43, 0.5);
        }}
        .protocol__number {{
            font-size: 3rem;
            font-weight: 900;
            color: #222;
            margin-bottom: 1rem;
            transition: color 0.3s ease;
        }}
        .protocol__step:hover .protocol__number {{
            color: rgba(106, 30, 43, 0.2);
        }}
        .protocol__step h4 {{
            font-size: 1.25rem;
            margin: 0 0 0.5rem;
        }}
        .protocol__step p {{
            color: #666;
            font-size: 0.875rem;
            line-height: 1.6;
        }}

        .contact {{
            border-top: 1px solid #222;
            background: #050505;
            padding: 5rem 0;
        }}
        .contact__inner {{
            max-width: 56rem;
            margin: 0 auto;
            padding: 0 1.5rem;
            text-align: center;
        }}
        .contact__title {{
            font-size: clamp(3rem, 8vw, 4.5rem);
            font-weight: 900;
            letter-spacing: -0.05em;
            text-transform: uppercase;
            margin-bottom: 2rem;
        }}
        .contact__cards {{
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 1.5rem;
            max-width: 32rem;
            margin: 0 auto 4rem;
        }}
        .contact__card {{
            display: block;
            padding: 2rem;
            border-radius: 0.75rem;
            background: #1a1a1a;
            border: 1px solid #333;
            text-align: left;
            text-decoration: none;
            transition: border-color 0.3s ease;
        }}
        .contact__card:hover {{
            border-color: #6A1E2B;
        }}
        .contact__card h4 {{
            color: #ffffff;
            font-size: 1.25rem;
            text-transform: uppercase;
            margin: 0 0 0.25rem;
        }}
        .contact__card:hover h4 {{
            color: #6A1E2B;
        }}
        .contact__card p {{
            color: #666;
            font-size: 0.875rem;
        }}
        .contact__bottom {{
            padding-top: 2rem;
            border-top: 1px solid #1a1a1a;
            display: flex;
            justify-content: space-between;
            align-items: center;
            color: #444;
            font-size: 0.875rem;
        }}
        .contact__links {{
            display: flex;
            gap: 2rem;
            font-weight: 500;
        }}
        .contact__links a {{
            color: #444;
            text-decoration: none;
            transition: color 0.3s ease;
        }}
        .contact__links a:hover {{
            color: #ffffff;
        }}

        @media (max-width: 1024px) {{
            .data__grid {{
                grid-template-columns: 1fr;
            }}
        }}
        @media (max-width: 768px) {{
            .section-inner {{
                padding: 5rem 1.5rem;
            }}
            .protocol__grid,
            .contact__cards {{
                grid-template-columns: 1fr;
            }}
            .data__panel-header,
            .contact__bottom {{
                flex-direction: column;
                align-items: flex-start;
                gap: 1rem;
            }}
        }}
        "#,
        reveal = config::REVEAL_TRANSITION_MS
    )
}
