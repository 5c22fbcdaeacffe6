use web_sys::MouseEvent;
use yew::prelude::*;

/// Next position, wrapping from the last slide back to the first. A
/// single-slide deck stays put.
pub fn next_index(current: usize, count: usize) -> usize {
    if count == 0 || current + 1 >= count {
        0
    } else {
        current + 1
    }
}

/// Previous position, wrapping from the first slide to the last.
pub fn prev_index(current: usize, count: usize) -> usize {
    if current == 0 {
        count.saturating_sub(1)
    } else {
        current - 1
    }
}

/// Horizontal offset of slide `index` when `current` is centered, in percent
/// of the slide's own width. One formula for every slide: the current one
/// sits at 0%, earlier slides shift left, later ones right.
pub fn slide_offset(index: usize, current: usize) -> i32 {
    100 * (index as i32 - current as i32)
}

struct Testimonial {
    header: &'static str,
    quote: &'static str,
    author: &'static str,
    location: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        header: "Best financial decision ever!",
        quote: "I moved my whole salary account over in an afternoon. No branch \
                visits, no paperwork, and the app stays out of my way.",
        author: "Aarav Lindqvist",
        location: "Helsinki, Finland",
    },
    Testimonial {
        header: "The last step to becoming a complete minimalist",
        quote: "One card, one screen, zero noise. Meridian is the only service \
                I pay for that actually wants me to spend less time on it.",
        author: "Miyah Miles",
        location: "Lisbon, Portugal",
    },
    Testimonial {
        header: "Finally free from old-school banks",
        quote: "Instant transfers and a fee page short enough to actually read. \
                I should have switched years ago.",
        author: "Francisco Gomes",
        location: "Porto, Portugal",
    },
];

/// Manual testimonial carousel: an index into the deck, moved by the arrow
/// buttons or the dots, rendered as one translateX per slide.
#[function_component(Slider)]
pub fn slider() -> Html {
    let current = use_state(|| 0usize);
    let count = TESTIMONIALS.len();

    let on_prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(prev_index(*current, count)))
    };
    let on_next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(next_index(*current, count)))
    };

    html! {
        <div class="slider">
            { for TESTIMONIALS.iter().enumerate().map(|(i, t)| {
                let style = format!("transform: translateX({}%);", slide_offset(i, *current));
                html! {
                    <div class="slide" {style}>
                        <div class="testimonial">
                            <h5 class="testimonial__header">{t.header}</h5>
                            <blockquote class="testimonial__text">{t.quote}</blockquote>
                            <address class="testimonial__author">
                                <h6 class="testimonial__name">{t.author}</h6>
                                <p class="testimonial__location">{t.location}</p>
                            </address>
                        </div>
                    </div>
                }
            }) }
            <button class="slider__btn slider__btn--left" onclick={on_prev}>{"←"}</button>
            <button class="slider__btn slider__btn--right" onclick={on_next}>{"→"}</button>
            <div class="dots">
                { for (0..count).map(|i| {
                    let onclick = {
                        let current = current.clone();
                        Callback::from(move |_: MouseEvent| current.set(i))
                    };
                    html! {
                        <button
                            class={classes!("dots__dot", (i == *current).then(|| "dots__dot--active"))}
                            data-slide={i.to_string()}
                            {onclick}
                        ></button>
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_render_offsets_are_multiples_of_slide_width() {
        for count in 1..=6 {
            for i in 0..count {
                assert_eq!(slide_offset(i, 0), 100 * i as i32);
            }
        }
    }

    #[test]
    fn current_slide_always_sits_at_zero() {
        for current in 0..5 {
            assert_eq!(slide_offset(current, current), 0);
        }
        assert_eq!(slide_offset(0, 3), -300);
        assert_eq!(slide_offset(4, 3), 100);
    }

    #[test]
    fn next_and_prev_wrap_at_the_boundaries() {
        assert_eq!(prev_index(0, 5), 4);
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(next_index(2, 5), 3);
        assert_eq!(prev_index(3, 5), 2);
    }

    #[test]
    fn next_then_prev_is_identity() {
        for count in 2..=6 {
            for current in 0..count {
                assert_eq!(prev_index(next_index(current, count), count), current);
                assert_eq!(next_index(prev_index(current, count), count), current);
            }
        }
    }

    #[test]
    fn single_slide_deck_never_moves() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }

    #[test]
    fn five_clicks_right_on_five_slides_comes_full_circle() {
        let mut current = 0;
        for _ in 0..5 {
            current = next_index(current, 5);
        }
        assert_eq!(current, 0);
        assert_eq!(slide_offset(0, current), 0);
    }
}
