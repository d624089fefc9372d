//! Bengali translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<&'static str, &'static str> {
    let mut t = HashMap::new();

    // Navigation
    t.insert("nav.home", "হোম");
    t.insert("nav.events", "অনুষ্ঠান");
    t.insert("nav.gallery", "গ্যালারি");
    t.insert("nav.culture", "সংস্কৃতি");
    t.insert("nav.rsvp", "উপস্থিতি");

    // Hero Section
    t.insert("hero.sacred_union", "শুভ মিলন");
    t.insert("hero.blessed_wedding", "শুভ বিবাহ");
    t.insert("hero.couple_names", "শুভশ্রী ও মৃন্ময়");
    t.insert("hero.couple_names_local", "শুভশ্রী ও মৃন্ময়");
    t.insert("hero.wedding_date", "৯ মার্চ, ২০২৬");
    t.insert("hero.venue", "শানাই ভবন, শিলিগুড়ি");
    t.insert("hero.countdown_title", "আমাদের শুভ মিলনের বাকি দিন");
    t.insert("hero.countdown.days", "দিন");
    t.insert("hero.countdown.hours", "ঘন্টা");
    t.insert("hero.countdown.minutes", "মিনিট");
    t.insert("hero.countdown.seconds", "সেকেন্ড");
    t.insert("hero.rsvp_button", "উপস্থিতি নিশ্চিত করুন");
    t.insert("hero.join_celebration", "বাঙালি ঐতিহ্য ও আশীর্বাদে আমাদের শুভ বিবাহ উদযাপনে আপনাদের সাদর আমন্ত্রণ");
    t.insert("hero.blessing", "শুভস্য শীঘ্রম্ — শুভ বিবাহ");
    t.insert("hero.blessing_translation", "এই শুভ মিলন মঙ্গলময় ও সমৃদ্ধ হোক");

    // Events Section
    t.insert("events.title", "বিবাহের অনুষ্ঠানসমূহ");
    t.insert("events.title_local", "বিবাহের অনুষ্ঠানসমূহ");
    t.insert("events.description", "ঐতিহ্যবাহী আচার-অনুষ্ঠান, সাংস্কৃতিক অনুষ্ঠান এবং একাধিক দিন ব্যাপী আনন্দময় উৎসবের সাথে একটি বাঙালি বিবাহ উদযাপনে আমাদের সাথে যোগ দিন। প্রতিটি অনুষ্ঠানের গভীর সাংস্কৃতিক তাৎপর্য রয়েছে এবং শতাব্দীর বাঙালি ঐতিহ্যের প্রতিনিধিত্ব করে।");
    t.insert("events.cultural_significance", "সাংস্কৃতিক তাৎপর্য");
    t.insert("events.traditional_rituals", "ঐতিহ্যবাহী আচার-অনুষ্ঠান");
    t.insert("events.dress_code", "পোশাক নির্দেশিকা");
    t.insert("events.guest_info_title", "অতিথিদের জন্য গুরুত্বপূর্ণ তথ্য");
    t.insert("events.cultural_etiquette", "সাংস্কৃতিক শিষ্টাচার");
    t.insert("events.practical_details", "ব্যবহারিক বিবরণ");
    t.insert("events.celebrate_with_us", "আমাদের সাথে উদযাপন করুন");
    t.insert("events.etiquette_1", "অনুষ্ঠানস্থলে প্রবেশের আগে জুতা খুলে রাখুন");
    t.insert("events.etiquette_2", "ধর্মীয় অনুষ্ঠানে শালীন পোশাক পরিধান করুন");
    t.insert("events.etiquette_3", "পবিত্র আচার-অনুষ্ঠানের সময় ছবি তোলা সীমিত থাকতে পারে");
    t.insert("events.etiquette_4", "বড়দের পায়ে হাত দেওয়া শ্রদ্ধার চিহ্ন");
    t.insert("events.etiquette_5", "উপহার দেওয়ার আগে দম্পতির আশীর্বাদের জন্য অপেক্ষা করুন");
    t.insert("events.practical_1", "সকল ভেন্যুতে পার্কিং এর ব্যবস্থা থাকবে");
    t.insert("events.practical_2", "নিরামিষ ও আমিষ দুই ধরনের খাবার পরিবেশন করা হবে");
    t.insert("events.practical_3", "বয়স্ক অতিথিদের জন্য বিশেষ ব্যবস্থা রয়েছে");
    t.insert("events.practical_4", "থাকার ব্যবস্থার জন্য পরিবারের সাথে যোগাযোগ করুন");
    t.insert("events.practical_5", "ঐতিহ্যবাহী বাঙালি মিষ্টি বিতরণ করা হবে");

    // Gallery Section
    t.insert("gallery.title", "ছবির গ্যালারি");
    t.insert("gallery.title_local", "ছবির গ্যালারি");
    t.insert("gallery.description", "বাঙালি ঐতিহ্যে আমাদের শুভ মিলনের সুন্দর অনুষ্ঠান ও একসাথে পথচলার স্মরণীয় মুহূর্তের সংকলন।");
    t.insert("gallery.all_photos", "সব ছবি");
    t.insert("gallery.all_photos_local", "সব ছবি");
    t.insert("gallery.mehendi", "মেহেন্দি");
    t.insert("gallery.mehendi_local", "মেহেন্দি");
    t.insert("gallery.gaye_holud", "গায়ে হলুদ");
    t.insert("gallery.gaye_holud_local", "গায়ে হলুদ");
    t.insert("gallery.ceremony", "বিয়ে");
    t.insert("gallery.ceremony_local", "বিয়ে");
    t.insert("gallery.reception", "রিসেপশন");
    t.insert("gallery.reception_local", "রিসেপশন");
    t.insert("gallery.pre_wedding", "বিবাহ-পূর্ব");
    t.insert("gallery.pre_wedding_local", "বিবাহ-পূর্ব");

    // Culture Section
    t.insert("culture.title", "বাঙালি বিবাহের সংস্কৃতি");
    t.insert("culture.title_local", "বাঙালি বিবাহের সংস্কৃতি");
    t.insert("culture.description", "প্রজন্ম থেকে প্রজন্মে চলে আসা বাঙালি বিবাহের সমৃদ্ধ ঐতিহ্য, রীতিনীতি এবং সাংস্কৃতিক তাৎপর্য অন্বেষণ করুন, যা বিবাহের পবিত্র বন্ধনের প্রতিনিধিত্ব করে।");
    t.insert("culture.key_traditions", "মূল ঐতিহ্য");
    t.insert("culture.blessings_title", "ঐতিহ্যবাহী বাঙালি বিবাহের আশীর্বাদ");
    t.insert("culture.bride_blessing", "কন্যার জন্য");
    t.insert("culture.bride_blessing_text", "সুবহগা হও, পুত্রবতী হও, আয়ুষ্মতী হও");
    t.insert("culture.bride_blessing_translation", "তুমি সৌভাগ্য, সন্তান এবং দীর্ঘায়ুর আশীর্বাদ পাও");
    t.insert("culture.couple_blessing", "দম্পতির জন্য");
    t.insert("culture.couple_blessing_text", "শুভ বিবাহ, শুভ জীবন, সুখী দাম্পত্য");
    t.insert("culture.couple_blessing_translation", "মঙ্গলময় বিবাহ, মঙ্গলময় জীবন, সুখী দাম্পত্য জীবন");

    // RSVP Section
    t.insert("rsvp.title", "উপস্থিতি নিশ্চিত করুন");
    t.insert("rsvp.title_local", "উপস্থিতি নিশ্চিত করুন");
    t.insert("rsvp.description", "আমাদের বিবাহ উদযাপনে আপনার উপস্থিতিতে আমরা সম্মানিত হব। এই শুভ অনুষ্ঠানে আপনি আমাদের সাথে যোগ দেবেন কিনা দয়া করে জানান।");
    t.insert("rsvp.full_name", "পূর্ণ নাম");
    t.insert("rsvp.email", "ইমেইল ঠিকানা");
    t.insert("rsvp.phone", "ফোন নম্বর");
    t.insert("rsvp.guest_count", "অতিথি সংখ্যা");
    t.insert("rsvp.event_selection", "আপনি কোন অনুষ্ঠানে উপস্থিত থাকবেন?");
    t.insert("rsvp.select_event", "একটি অনুষ্ঠান নির্বাচন করুন");
    t.insert("rsvp.attending_question", "আপনি কি উপস্থিত থাকবেন?");
    t.insert("rsvp.yes_attending", "হ্যাঁ, আমি থাকব");
    t.insert("rsvp.no_attending", "দুঃখিত, আসতে পারব না");
    t.insert("rsvp.dietary_restrictions", "খাদ্য বিধিনিষেধ বা অ্যালার্জি");
    t.insert("rsvp.dietary_placeholder", "দয়া করে কোনো খাদ্যগত প্রয়োজনীয়তা সম্পর্কে জানান");
    t.insert("rsvp.message", "বিশেষ বার্তা বা শুভেচ্ছা");
    t.insert("rsvp.message_placeholder", "দম্পতির জন্য আপনার আশীর্বাদ, শুভেচ্ছা বা কোনো বিশেষ বার্তা শেয়ার করুন");
    t.insert("rsvp.submit", "উপস্থিতি জানান");
    t.insert("rsvp.submitting", "পাঠানো হচ্ছে...");
    t.insert("rsvp.success_title", "আপনার উপস্থিতির জন্য ধন্যবাদ!");
    t.insert("rsvp.success_subtitle", "আপনার উপস্থিতির জন্য ধন্যবাদ");
    t.insert("rsvp.success_message", "আমাদের বিশেষ উদযাপনে আপনি যোগ দেবেন জেনে আমরা আনন্দিত। শীঘ্রই আপনি সমস্ত বিবরণ সহ একটি নিশ্চিতকরণ ইমেইল পাবেন।");

    // Calendar Integration
    t.insert("calendar.add_to_calendar", "ক্যালেন্ডারে যোগ করুন");
    t.insert("calendar.never_miss_event", "এই বিশেষ মুহূর্তটি মিস করবেন না");
    t.insert("calendar.add_to_google", "গুগল ক্যালেন্ডারে যোগ করুন");
    t.insert("calendar.add_to_outlook", "আউটলুকে যোগ করুন");
    t.insert("calendar.download_ics", "ক্যালেন্ডার ফাইল ডাউনলোড করুন");
    t.insert("calendar.choose_calendar", "আপনার ক্যালেন্ডার অ্যাপ বেছে নিন:");
    t.insert("calendar.download_file", "অথবা ক্যালেন্ডার ফাইল ডাউনলোড করুন:");
    t.insert("calendar.ics_description", "অ্যাপল ক্যালেন্ডার, আউটলুক এবং অন্যান্য ক্যালেন্ডার অ্যাপের সাথে সামঞ্জস্যপূর্ণ");
    t.insert("calendar.reminder_included", "রিমাইন্ডার অন্তর্ভুক্ত!");
    t.insert("calendar.reminder_description", "অনুষ্ঠান শুরুর ১ ঘন্টা আগে আপনি একটি বিজ্ঞপ্তি পাবেন।");

    // Footer
    t.insert("footer.brand", "শুভ মিলন");
    t.insert("footer.tagline", "বাঙালি ঐতিহ্য ও সংস্কৃতির সাথে ভালোবাসার চিরন্তন বন্ধন উদযাপন।");
    t.insert("footer.blessing_footer", "তারপর পথ হারালো তোমায় আমায় নিয়ে");
    t.insert("footer.quick_links", "দ্রুত লিঙ্ক");
    t.insert("footer.contact_families", "পরিবারের যোগাযোগ");
    t.insert("footer.wedding_timeline", "বিবাহের সময়সূচী");
    t.insert("footer.copyright", "© ২০২৬ শুভশ্রী ও মৃন্ময় বিবাহ। ভালোবাসা ও বাঙালি ঐতিহ্যের সাথে তৈরি।");
    t.insert("footer.quote", "তারপর পথ হারালো তোমায় আমায় নিয়ে");
    t.insert("footer.quote_translation", "তারপর পথ হারালো তোমায় আমায় নিয়ে");

    // Common
    t.insert("common.required", "আবশ্যক");
    t.insert("common.optional", "ঐচ্ছিক");
    t.insert("common.loading", "লোড হচ্ছে...");
    t.insert("common.error", "ত্রুটি");
    t.insert("common.success", "সফল");

    // Theme
    t.insert("theme.title", "থিম");
    t.insert("theme.light", "হালকা");
    t.insert("theme.dark", "গাঢ়");
    t.insert("theme.auto", "স্বয়ংক্রিয় (ভারতের দিনের আলো অনুযায়ী)");

    // Language
    t.insert("language.title", "ভাষা");
    t.insert("language.changed", "ভাষা পরিবর্তন করা হয়েছে");

    // Countdown state
    t.insert("hero.countdown.complete", "উৎসব শুরু হয়ে গেছে!");

    // RSVP validation
    t.insert("rsvp.error.name_required", "নাম আবশ্যক");
    t.insert("rsvp.error.email_required", "ইমেইল আবশ্যক");
    t.insert("rsvp.error.email_invalid", "ইমেইল সঠিক নয়");
    t.insert("rsvp.error.phone_required", "ফোন নম্বর আবশ্যক");
    t.insert("rsvp.error.event_required", "অনুগ্রহ করে একটি অনুষ্ঠান নির্বাচন করুন");
    t.insert("rsvp.error.guest_count_range", "অতিথি সংখ্যা ১ থেকে ১০ এর মধ্যে হতে হবে");

    t
}
