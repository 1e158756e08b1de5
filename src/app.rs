use crate::components::{
    footer::Footer,
    progress_bar::{ProgressBar, ProgressColor, ProgressSize},
};
use gloo::console::log;
use gloo::timers::callback::Interval;
use yew::prelude::*;

const ONBOARDING_STEPS: f64 = 12.0;
const TICK_MS: u32 = 800;

struct Stage {
    name: &'static str,
    deals: f64,
    target: f64,
    color: ProgressColor,
}

const PIPELINE: [Stage; 5] = [
    Stage { name: "Leads", deals: 42.0, target: 60.0, color: ProgressColor::Primary },
    Stage { name: "Qualified", deals: 18.0, target: 25.0, color: ProgressColor::Info },
    Stage { name: "Proposal", deals: 9.0, target: 20.0, color: ProgressColor::Warning },
    Stage { name: "Won", deals: 14.0, target: 12.0, color: ProgressColor::Success },
    Stage { name: "Lost", deals: 3.0, target: 10.0, color: ProgressColor::Error },
];

pub struct App {
    onboarding_done: f64,
    // Dropping the handle cancels the timer.
    ticker: Option<Interval>,
}

pub enum Msg {
    Tick,
    Restart,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        log!("Relay CRM dashboard mounted");

        Self {
            onboarding_done: 0.0,
            ticker: Some(start_ticker(ctx)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Tick => {
                self.onboarding_done += 1.0;
                if self.onboarding_done >= ONBOARDING_STEPS {
                    self.ticker = None;
                    log!("Onboarding checklist complete");
                }
                true
            }
            Msg::Restart => {
                self.onboarding_done = 0.0;
                self.ticker = Some(start_ticker(ctx));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-container">
                <header>
                    <h1>{ "Sales Pipeline" }</h1>
                </header>

                <main>
                    <div class="panel">
                        <h2>{ "Quarterly targets" }</h2>
                        {
                            for PIPELINE.iter().map(|stage| html! {
                                <div class="pipeline-stage">
                                    <h3>{ stage.name }</h3>
                                    <ProgressBar
                                        value={stage.deals}
                                        max={stage.target}
                                        color={stage.color}
                                    />
                                </div>
                            })
                        }
                    </div>

                    <div class="panel">
                        <h2>{ "Onboarding" }</h2>
                        <ProgressBar
                            value={self.onboarding_done}
                            max={ONBOARDING_STEPS}
                            size={ProgressSize::Large}
                            color={ProgressColor::Success}
                            label={AttrValue::from(format!("{} of {} steps", self.onboarding_done, ONBOARDING_STEPS))}
                        />
                        <ProgressBar
                            value={self.onboarding_done}
                            max={ONBOARDING_STEPS}
                            size={ProgressSize::Small}
                            show_label={false}
                            class="onboarding-mini"
                        />
                        <button
                            onclick={ctx.link().callback(|_| Msg::Restart)}
                            disabled={self.ticker.is_some()}
                            class="restart-button"
                        >
                            { "Restart" }
                        </button>
                    </div>
                </main>

                <Footer />
            </div>
        }
    }
}

fn start_ticker(ctx: &Context<App>) -> Interval {
    let link = ctx.link().clone();
    Interval::new(TICK_MS, move || link.send_message(Msg::Tick))
}
