// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale catalogs and flat key lookup.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::bundle::*;
use crate::locale::Locale;

static EN: Bundle = Bundle {
	home: HomeText {
		est: "EST. 2024",
		title: &["The", "Event Host"],
		play_reel: "PLAY REEL",
		book_now: "BOOK NOW",
		nav: HomeNavText {
			home: "HOME",
			party: "PARTY",
			business: "BUSINESS",
			wedding: "WEDDING",
			contact: "CONTACT",
		},
	},
	modal: ModalText {
		title: "GET IN TOUCH",
		subtitle: "Tell us about your event.",
		name_label: "NAME",
		name_placeholder: "Your Name",
		contact_label: "CONTACT",
		contact_placeholder: "Email or Phone",
		send_button: "SEND REQUEST",
		close: "CLOSE",
	},
	contact: ContactText {
		back: "BACK",
		title: &["Get in", "Touch"],
		email_label: "EMAIL",
		phone_label: "PHONE",
		form: ContactFormText {
			name_placeholder: "Your Name",
			date_placeholder: "Date",
			type_placeholder: "Event Type",
			details_placeholder: "Details...",
			send_button: "SEND REQUEST",
			types: EventTypeText {
				default: "Event Type",
				party: "Party",
				business: "Business",
				wedding: "Wedding",
				other: "Other",
			},
		},
	},
	business: BusinessText {
		brand_suffix: "BUSINESS",
		nav: BusinessNavText {
			home: "Home",
			about: "About Me",
			portfolio: "Portfolio",
			contact: "Contact",
		},
		home: BusinessHomeText {
			title: &["Elevate Your", "Corporate Event."],
			lead: "Professional hosting for conferences, summits, and award ceremonies. \
			       Delivering stability, trust, and ROI for your brand.",
			request_proposal: "Request Proposal",
			view_portfolio: "View Portfolio",
		},
		portfolio: PortfolioText {
			view_project: "View Project",
			play: "Play",
			pause: "Pause",
			mute: "Mute",
			unmute: "Unmute",
			fullscreen: "Fullscreen",
			restart: "Restart",
		},
		contact: BusinessContactText {
			title: "Get in Touch",
			name_label: "Name",
			name_placeholder: "Your name",
			date_label: "Date",
			date_placeholder: "Event date",
			type_label: "Event type",
			type_placeholder: "Choose a type",
			message_label: "Message",
			message_placeholder: "Tell us about your event...",
			send_button: "Send",
			why_title: "Why choose us?",
			benefits: &[
				Benefit {
					title: "Professional approach",
					body: "Experience running 100+ successful events of every scale",
				},
				Benefit {
					title: "Full service cycle",
					body: "From concept to delivery, we take care of every organisational detail",
				},
				Benefit {
					title: "Individual approach",
					body: "Every event is unique, so we build the solution around your needs",
				},
				Benefit {
					title: "Technical support",
					body: "Modern equipment and technology for your event",
				},
			],
		},
	},
	status: StatusText {
		sending: "SENDING...",
		success: "Message sent successfully!",
		error: "Failed to send message. Please try again.",
		required: "Please fill in the required fields.",
	},
};

static UK: Bundle = Bundle {
	home: HomeText {
		est: "ЗАСН. 2024",
		title: &["Ведучий", "Ваших", "Подій"],
		play_reel: "ДИВИТИСЬ ВІДЕО",
		book_now: "ЗАБРОНЮВАТИ",
		nav: HomeNavText {
			home: "ГОЛОВНА",
			party: "ВЕЧІРКА",
			business: "БІЗНЕС",
			wedding: "ВЕСІЛЛЯ",
			contact: "КОНТАКТИ",
		},
	},
	modal: ModalText {
		title: "ЗВ'ЯЖІТЬСЯ З НАМИ",
		subtitle: "Розкажіть про вашу подію.",
		name_label: "ІМ'Я",
		name_placeholder: "Ваше Ім'я",
		contact_label: "КОНТАКТИ",
		contact_placeholder: "Email або Телефон",
		send_button: "НАДІСЛАТИ ЗАПИТ",
		close: "ЗАКРИТИ",
	},
	contact: ContactText {
		back: "НАЗАД",
		title: &["Зв'яжіться з нами"],
		email_label: "EMAIL",
		phone_label: "ТЕЛЕФОН",
		form: ContactFormText {
			name_placeholder: "Ваше Ім'я",
			date_placeholder: "Дата",
			type_placeholder: "Тип Події",
			details_placeholder: "Деталі...",
			send_button: "НАДІСЛАТИ ЗАПИТ",
			types: EventTypeText {
				default: "Тип Події",
				party: "Вечірка",
				business: "Бізнес",
				wedding: "Весілля",
				other: "Інше",
			},
		},
	},
	business: BusinessText {
		brand_suffix: "БІЗНЕС",
		nav: BusinessNavText {
			home: "Головна",
			about: "Про мене",
			portfolio: "Портфоліо",
			contact: "Контакти",
		},
		home: BusinessHomeText {
			title: &["Підніміть рівень", "корпоративної події."],
			lead: "Професійне ведення конференцій, самітів і церемоній нагородження. \
			       Стабільність, довіра та результат для вашого бренду.",
			request_proposal: "Отримати пропозицію",
			view_portfolio: "Переглянути портфоліо",
		},
		portfolio: PortfolioText {
			view_project: "Переглянути проєкт",
			play: "Відтворити",
			pause: "Пауза",
			mute: "Вимкнути звук",
			unmute: "Увімкнути звук",
			fullscreen: "На весь екран",
			restart: "Спочатку",
		},
		contact: BusinessContactText {
			title: "Зв'язатися з нами",
			name_label: "Ім'я",
			name_placeholder: "Ваше ім'я",
			date_label: "Дата",
			date_placeholder: "Дата події",
			type_label: "Тип події",
			type_placeholder: "Оберіть тип",
			message_label: "Повідомлення",
			message_placeholder: "Розкажіть про вашу подію...",
			send_button: "Відправити",
			why_title: "Чому обрати нас?",
			benefits: &[
				Benefit {
					title: "Професійний підхід",
					body: "Досвід організації понад 100+ успішних подій різного масштабу",
				},
				Benefit {
					title: "Повний цикл послуг",
					body: "Від концепції до реалізації - ми беремо на себе всі організаційні питання",
				},
				Benefit {
					title: "Індивідуальний підхід",
					body: "Кожна подія унікальна - ми створюємо рішення під ваші потреби",
				},
				Benefit {
					title: "Технічна підтримка",
					body: "Сучасне обладнання та технології для вашої події",
				},
			],
		},
	},
	status: StatusText {
		sending: "Відправка...",
		success: "Дякуємо! Ваше повідомлення успішно відправлено.",
		error: "Щось пішло не так. Спробуйте ще раз.",
		required: "Будь ласка, заповніть обов'язкові поля.",
	},
};

static EN_INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| build_index(Locale::En));
static UK_INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| build_index(Locale::Uk));

fn build_index(locale: Locale) -> HashMap<String, &'static str> {
	let index: HashMap<_, _> = bundle(locale).flatten().into_iter().collect();
	tracing::debug!(locale = %locale, keys = index.len(), "built translation index");
	index
}

/// The complete bundle for a locale.
pub fn bundle(locale: Locale) -> &'static Bundle {
	match locale {
		Locale::En => &EN,
		Locale::Uk => &UK,
	}
}

/// All `(key, value)` pairs of a locale, in bundle order.
pub fn entries(locale: Locale) -> Vec<(String, &'static str)> {
	bundle(locale).flatten()
}

/// Look up a string by dotted key.
///
/// Unknown keys return the key itself so a typo is visible on the page rather
/// than rendering as an empty string. There is no cross-locale fallback.
///
/// ```
/// use mindra_common_i18n::{t, Locale};
///
/// assert_eq!(t(Locale::Uk, "modal.send_button"), "НАДІСЛАТИ ЗАПИТ");
/// assert_eq!(t(Locale::En, "no.such.key"), "no.such.key");
/// ```
pub fn t(locale: Locale, key: &str) -> String {
	let index = match locale {
		Locale::En => &*EN_INDEX,
		Locale::Uk => &*UK_INDEX,
	};
	match index.get(key) {
		Some(value) => (*value).to_string(),
		None => {
			tracing::warn!(locale = %locale, key, "missing translation key");
			key.to_string()
		}
	}
}
