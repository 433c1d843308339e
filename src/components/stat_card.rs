use yew::prelude::*;

use super::icons::{icon_target, icon_trending_up, icon_wallet};
use crate::format::format_rupiah;

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Spending,
    Budget,
    Remaining,
}

#[derive(Clone, Copy, PartialEq)]
pub enum Tone {
    Neutral,
    Good,
    Bad,
}

impl Tone {
    fn value_class(self) -> &'static str {
        match self {
            Tone::Neutral => "text-2xl font-bold text-[#1D617A] tracking-tight",
            Tone::Good => "text-2xl font-bold text-green-600 tracking-tight",
            Tone::Bad => "text-2xl font-bold text-red-600 tracking-tight",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub amount: f64,
    pub icon: StatIcon,
    #[prop_or(Tone::Neutral)]
    pub tone: Tone,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</p>
                <h3 class={props.tone.value_class()}>{ format_rupiah(props.amount) }</h3>
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::Spending => icon_trending_up(),
                        StatIcon::Budget => icon_target(),
                        StatIcon::Remaining => icon_wallet(),
                    }
                }
            </div>
        </div>
    }
}
