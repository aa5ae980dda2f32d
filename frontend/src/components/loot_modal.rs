use shared::catalog::Catalog;
use shared::inventory::Inventory;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LootModalProps {
    pub inventory: Inventory,
    pub catalog: Catalog,
    pub on_redeem: Callback<usize>,
    pub on_close: Callback<()>,
}

pub fn source_name(catalog: &Catalog, wheel_id: &str) -> String {
    catalog
        .wheel(wheel_id)
        .map(|wheel| wheel.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Held rewards grouped by item, labelled for the summary strip.
pub fn count_labels(inventory: &Inventory) -> Vec<(String, usize)> {
    inventory
        .counts()
        .into_iter()
        .map(|(item_id, count)| {
            let label = inventory
                .iter()
                .find(|record| record.item_id == item_id)
                .map(|record| record.label.clone())
                .unwrap_or(item_id);
            (label, count)
        })
        .collect()
}

#[function_component(LootModal)]
pub fn loot_modal(props: &LootModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let summary = count_labels(&props.inventory);

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={close.clone()}>
            <div class={styles::MODAL_CARD} onclick={stop}>
                <div class="bg-indigo-600 p-6 flex justify-between items-center text-white">
                    <h2 class="text-2xl font-bold flex items-center gap-2">{"🏆 My Loot"}</h2>
                    <button onclick={close} class="bg-white/20 p-1 rounded-full hover:bg-white/40">{"✕"}</button>
                </div>

                if !summary.is_empty() {
                    <div class="px-6 pt-4 flex flex-wrap gap-2">
                        { for summary.iter().map(|(label, count)| html! {
                            <span key={label.clone()} class={styles::COUNT_CHIP}>{format!("{} ×{}", label, count)}</span>
                        })}
                    </div>
                }

                <div class="p-6 max-h-[60vh] overflow-y-auto">
                    if props.inventory.is_empty() {
                        <div class="text-center py-10 text-gray-400">
                            <p class="text-5xl mb-4 opacity-30">{"🎁"}</p>
                            <p>{"No rewards yet. Spin the wheel!"}</p>
                        </div>
                    } else {
                        <div class="space-y-3">
                            { for props.inventory.iter().enumerate().map(|(index, record)| {
                                let on_use = {
                                    let on_redeem = props.on_redeem.clone();
                                    Callback::from(move |_: MouseEvent| on_redeem.emit(index))
                                };
                                html! {
                                    <div key={index} class={styles::LOOT_ROW}>
                                        <div>
                                            <p class="font-bold text-lg">{&record.label}</p>
                                            <p class="text-xs text-gray-500 uppercase tracking-wider">
                                                {source_name(&props.catalog, &record.source_wheel_id)}
                                            </p>
                                        </div>
                                        <button onclick={on_use} class={styles::USE_BUTTON}>{"USE"}</button>
                                    </div>
                                }
                            })}
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::catalog::{RewardItem, OWL};
    use shared::inventory::SpinRecord;

    #[test]
    fn test_source_name() {
        let catalog = Catalog::builtin();
        assert_eq!(source_name(&catalog, OWL), "Owl Spinner");
        assert_eq!(source_name(&catalog, "gone"), "Unknown");
    }

    #[test]
    fn test_count_labels() {
        let ice = RewardItem::new("ice_cream", "Ice Cream", 1.0, None);
        let screen = RewardItem::new("screen_30", "30m Screen", 1.0, None);
        let mut inventory = Inventory::default();
        for item in [&ice, &screen, &ice] {
            inventory.add(SpinRecord::new(item, OWL, Utc::now()));
        }
        assert_eq!(
            count_labels(&inventory),
            vec![("Ice Cream".to_string(), 2), ("30m Screen".to_string(), 1)]
        );
        assert!(count_labels(&Inventory::default()).is_empty());
    }
}
